use std::fmt::Write;

use super::Preview;

impl Preview {
    /// Plain-text layout for terminals.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        let rule = "=".repeat(40);

        writeln!(out, "{}", rule)?;
        writeln!(out, "{}", self.header.kicker)?;
        writeln!(out, "{}", self.header.title)?;
        writeln!(out, "{}", self.header.subtitle)?;
        if let Some(badge) = &self.validity_badge {
            writeln!(out, "[{}]", badge)?;
        }
        writeln!(out, "{}", rule)?;
        writeln!(out)?;
        writeln!(out, "{}", self.section_title)?;
        writeln!(out)?;

        if self.cards.is_empty() {
            writeln!(out, "  (nenhum produto)")?;
        }
        for card in &self.cards {
            let mut badges = Vec::new();
            if let Some(badge) = &card.discount_badge {
                badges.push(badge.as_str());
            }
            if let Some(badge) = card.adult_badge {
                badges.push(badge);
            }

            write!(out, "  {}", card.name)?;
            if !badges.is_empty() {
                write!(out, " [{}]", badges.join("] ["))?;
            }
            writeln!(out)?;
            if let Some(was) = &card.was_price {
                writeln!(out, "    {}", was)?;
            }
            writeln!(out, "    {}", card.price)?;
        }

        if let Some(footer) = &self.footer {
            writeln!(out)?;
            if let Some(name) = &footer.store_name {
                writeln!(out, "{}", name)?;
            }
            if let Some(address) = &footer.store_address {
                writeln!(out, "{}", address)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", self.disclaimer)
    }
}
