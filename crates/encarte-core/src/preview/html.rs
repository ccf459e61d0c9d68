use std::fmt::Write;

use super::{Preview, ProductCard};

const PAGE_STYLE: &str = "body{margin:0;font-family:Arial,Helvetica,sans-serif}\
.flyer{max-width:720px;margin:0 auto}\
header{padding:24px;text-align:center}\
header h1{margin:4px 0;font-size:40px}\
.kicker{text-transform:uppercase;letter-spacing:2px;font-size:12px}\
.validity{display:inline-block;margin-top:8px;padding:4px 12px;border-radius:12px;font-weight:bold}\
main{padding:16px}\
main h2{text-align:center}\
.grid{display:grid;grid-template-columns:repeat(2,1fr);gap:12px}\
.card{position:relative;background:#fff;color:#111;border-radius:8px;padding:12px;text-align:center}\
.card img{max-width:100%;height:120px;object-fit:contain}\
.badge{position:absolute;top:8px;padding:2px 6px;border-radius:6px;font-weight:bold;font-size:12px}\
.discount{left:8px}.adult{right:8px;background:#000;color:#fff}\
.was{text-decoration:line-through;color:#666;font-size:13px}\
.price{font-size:24px;font-weight:bold}\
footer{padding:16px;text-align:center}\
.disclaimer{font-size:11px;text-align:center;padding:8px}";

impl Preview {
    /// A standalone HTML document with the theme colours inlined.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) -> std::fmt::Result {
        let style = &self.style;

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"pt-BR\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", escape(self.header.title))?;
        writeln!(out, "<style>{}</style>", PAGE_STYLE)?;
        writeln!(out, "</head>")?;
        writeln!(
            out,
            "<body style=\"background:{};color:{}\">",
            style.body.background, style.body.foreground
        )?;
        writeln!(out, "<div class=\"flyer\" data-theme=\"{}\">", escape(self.theme_id))?;

        writeln!(
            out,
            "<header style=\"background:{};color:{}\">",
            style.header.background, style.header.foreground
        )?;
        match self.header.banner {
            Some(banner) => writeln!(
                out,
                "<img class=\"banner\" src=\"{}\" alt=\"{}\">",
                escape(banner),
                escape(self.header.title)
            )?,
            None => {
                writeln!(out, "<div class=\"kicker\">{}</div>", escape(self.header.kicker))?;
                writeln!(out, "<h1>{}</h1>", escape(self.header.title))?;
                writeln!(out, "<p>{}</p>", escape(self.header.subtitle))?;
            }
        }
        if let Some(badge) = &self.validity_badge {
            writeln!(
                out,
                "<div class=\"validity\" style=\"background:{};color:{}\">{}</div>",
                style.accent.background,
                style.accent.foreground,
                escape(badge)
            )?;
        }
        writeln!(out, "</header>")?;

        writeln!(out, "<main>")?;
        writeln!(
            out,
            "<h2 style=\"color:{}\">{}</h2>",
            style.text.foreground,
            escape(self.section_title)
        )?;
        writeln!(out, "<div class=\"grid\">")?;
        for card in &self.cards {
            self.write_card(out, card)?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</main>")?;

        if let Some(footer) = &self.footer {
            writeln!(
                out,
                "<footer style=\"background:{};color:{}\">",
                style.header.background, style.header.foreground
            )?;
            if let Some(name) = &footer.store_name {
                writeln!(out, "<strong>{}</strong><br>", escape(name))?;
            }
            if let Some(address) = &footer.store_address {
                writeln!(out, "<span>{}</span>", escape(address))?;
            }
            writeln!(out, "</footer>")?;
        }

        writeln!(out, "<p class=\"disclaimer\">{}</p>", escape(&self.disclaimer))?;
        writeln!(out, "</div>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }

    fn write_card(&self, out: &mut String, card: &ProductCard) -> std::fmt::Result {
        writeln!(out, "<div class=\"card\" data-id=\"{}\">", escape(card.id.as_str()))?;
        if let Some(badge) = &card.discount_badge {
            writeln!(
                out,
                "<span class=\"badge discount\" style=\"background:{};color:{}\">{}</span>",
                self.style.accent.background,
                self.style.accent.foreground,
                escape(badge)
            )?;
        }
        if let Some(badge) = card.adult_badge {
            writeln!(out, "<span class=\"badge adult\">{}</span>", escape(badge))?;
        }
        if let Some(url) = &card.image_url {
            writeln!(out, "<img src=\"{}\" alt=\"{}\">", escape(url), escape(&card.name))?;
        }
        writeln!(out, "<h3>{}</h3>", escape(&card.name))?;
        if let Some(was) = &card.was_price {
            writeln!(out, "<div class=\"was\">{}</div>", escape(was))?;
        }
        writeln!(out, "<div class=\"price\">{}</div>", escape(&card.price))?;
        writeln!(out, "</div>")
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
