//! Show the current flyer.

use anyhow::Result;

use crate::context::Context;
use crate::output::price_cell;

/// Run the show command.
pub fn run(ctx: &Context) -> Result<()> {
    let editor = ctx.editor();
    let preview = editor.preview();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "flyer": editor.flyer(),
            "preview": preview,
        }));
        return Ok(());
    }

    let flyer = editor.flyer();
    ctx.output.header("Flyer");
    ctx.output.kv("theme", &format!("{} ({})", editor.theme().name, flyer.theme_id));
    ctx.output.kv("store", or_dash(&flyer.store_name));
    ctx.output.kv("address", or_dash(&flyer.store_address));
    ctx.output.kv("valid until", or_dash(&flyer.valid_until));

    ctx.output.header(&format!("Products ({})", flyer.products.len()));
    if preview.cards.is_empty() {
        ctx.output.info("No products yet. Add one with `encarte add <name> <price>`.");
    }
    for card in &preview.cards {
        let mut badges = String::new();
        if let Some(badge) = &card.discount_badge {
            badges.push_str(badge);
        }
        if let Some(badge) = card.adult_badge {
            if !badges.is_empty() {
                badges.push(' ');
            }
            badges.push_str(badge);
        }
        ctx.output.table_row(
            &[
                card.id.as_str(),
                &card.name,
                &badges,
                &price_cell(card.was_price.as_deref(), &card.price),
            ],
            &[16, 28, 10, 0],
        );
    }

    ctx.output.header("Preview");
    ctx.output.preview(&preview);
    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
