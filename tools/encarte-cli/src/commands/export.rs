//! Export the rendered flyer as a shareable file.

use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::Utc;
use encarte_core::preview::Preview;

use super::ExportArgs;
use crate::config::ExportFormat;
use crate::context::Context;

/// Run the export command.
pub fn run(args: ExportArgs, ctx: &Context) -> Result<()> {
    let format = args.format.unwrap_or(ctx.config.export.format);
    let preview = ctx.editor().preview();

    let path = match args.output {
        Some(output) => ctx.resolve_path(&output),
        None => ctx.export_dir().join(default_file_name(format)),
    };

    let contents = render_export(&preview, format)?;
    write(&path, &contents).with_context(|| format!("Failed to export to {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "path": path }));
    } else {
        ctx.output.success(&format!("Exported {}", path.display()));
    }
    Ok(())
}

fn render_export(preview: &Preview, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Html => preview.to_html(),
        ExportFormat::Json => serde_json::to_string_pretty(preview)?,
    })
}

fn default_file_name(format: ExportFormat) -> String {
    format!("encarte-{}.{}", Utc::now().timestamp_millis(), format.extension())
}

fn write(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encarte_core::prelude::{Flyer, ThemeCatalog};

    #[test]
    fn test_default_file_name() {
        let name = default_file_name(ExportFormat::Html);
        assert!(name.starts_with("encarte-"));
        assert!(name.ends_with(".html"));
        let millis = &name["encarte-".len()..name.len() - ".html".len()];
        assert!(millis.parse::<i64>().is_ok());
    }

    #[test]
    fn test_render_json() {
        let preview = render_default();
        let json = render_export(&preview, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["header"]["title"], "OFERTA DO DIA");
    }

    #[test]
    fn test_write_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports").join("out.html");
        write(&path, &render_export(&render_default(), ExportFormat::Html).unwrap()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("<html"));
    }

    fn render_default() -> Preview {
        encarte_core::preview::render(&Flyer::default(), &ThemeCatalog::builtin())
    }
}
