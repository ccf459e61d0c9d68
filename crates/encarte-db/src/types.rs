//! Database value types and conversions.

use crate::DbError;
use rusqlite::types::{ToSql, ToSqlOutput, ValueRef};
use serde::de::DeserializeOwned;

/// A SQLite value, used both for bound parameters and for result cells.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

macro_rules! value_from {
    ($($ty:ty => |$v:ident| $body:expr),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from($v: $ty) -> Self {
                    $body
                }
            }
        )+
    };
}

value_from! {
    i32 => |v| Value::Integer(i64::from(v)),
    i64 => |v| Value::Integer(v),
    f64 => |v| Value::Real(v),
    bool => |v| Value::Integer(i64::from(v)),
    &str => |v| Value::Text(v.to_owned()),
    &String => |v| Value::Text(v.clone()),
    String => |v| Value::Text(v),
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            Value::Integer(i) => ToSqlOutput::Borrowed(ValueRef::Integer(*i)),
            Value::Real(f) => ToSqlOutput::Borrowed(ValueRef::Real(*f)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

impl TryFrom<ValueRef<'_>> for Value {
    type Error = DbError;

    fn try_from(value: ValueRef<'_>) -> Result<Self, Self::Error> {
        Ok(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(bytes) => Value::Text(
                String::from_utf8(bytes.to_vec())
                    .map_err(|e| DbError::TypeError(format!("non UTF-8 text column: {}", e)))?,
            ),
            ValueRef::Blob(_) => {
                return Err(DbError::TypeError("blob columns are not supported".to_string()))
            }
        })
    }
}

/// One result row, with its column names.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    /// Create a new row from columns and values.
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    /// Try to deserialize the row into a type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, DbError> {
        // Row -> JSON object -> T, so column names map onto serde field names
        let map: serde_json::Map<String, serde_json::Value> = self
            .columns
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| (k.clone(), value_to_json(v)))
            .collect();

        let json = serde_json::Value::Object(map);
        serde_json::from_value(json).map_err(|e| DbError::DeserializeError(e.to_string()))
    }
}

/// All rows returned by a query.
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the first row.
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }
}

/// Convert a Value to a serde_json::Value.
fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Real(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Text(s) => serde_json::Value::String(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct FlyerRow {
        id: i64,
        title: String,
        data: Option<String>,
    }

    fn sample_row() -> Row {
        Row::new(
            vec!["id".to_string(), "title".to_string(), "data".to_string()],
            vec![
                Value::Integer(1),
                Value::Text("sextou".to_string()),
                Value::Null,
            ],
        )
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(7), Value::Integer(7));
        assert_eq!(Value::from(true), Value::Integer(1));
        assert_eq!(Value::from("a"), Value::Text("a".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(2.5)), Value::Real(2.5));
    }

    #[test]
    fn test_row_deserialize() {
        let row = sample_row();
        let parsed: FlyerRow = row.deserialize().unwrap();
        assert_eq!(
            parsed,
            FlyerRow {
                id: 1,
                title: "sextou".to_string(),
                data: None,
            }
        );
    }

    #[test]
    fn test_real_to_json() {
        assert_eq!(value_to_json(&Value::Real(2.5)), serde_json::json!(2.5));
        assert_eq!(value_to_json(&Value::Real(f64::NAN)), serde_json::Value::Null);
    }

    #[test]
    fn test_blob_column_is_type_error() {
        let err = Value::try_from(ValueRef::Blob(b"raw")).unwrap_err();
        assert!(matches!(err, DbError::TypeError(_)));
    }

    #[test]
    fn test_non_utf8_text_is_type_error() {
        let err = Value::try_from(ValueRef::Text(&[0xff, 0xfe])).unwrap_err();
        assert!(matches!(err, DbError::TypeError(_)));
    }
}
