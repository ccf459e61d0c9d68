//! Theme, store and validity commands.

use anyhow::{bail, Result};
use encarte_core::editor::FlyerEditor;
use serde_json::json;

use super::{StoreArgs, ThemeArgs, ThemeCommand, ValidUntilArgs};
use crate::context::Context;

/// Run the theme command.
pub fn theme(args: ThemeArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ThemeCommand::List => list_themes(ctx),
        ThemeCommand::Set { id } => set_theme(&id, ctx),
    }
}

fn list_themes(ctx: &Context) -> Result<()> {
    let editor = ctx.editor();
    let themes = editor.catalog().all();

    if ctx.output.is_json() {
        ctx.output.json(&themes);
        return Ok(());
    }

    ctx.output.header("Themes");
    let current = editor.theme().id;
    for theme in themes {
        let marker = if theme.id == current { "*" } else { " " };
        ctx.output
            .table_row(&[marker, theme.id, theme.name, theme.title], &[1, 16, 20, 0]);
    }
    Ok(())
}

fn set_theme(id: &str, ctx: &Context) -> Result<()> {
    let mut editor = ctx.editor();
    if editor.catalog().get(id).is_none() {
        let known: Vec<&str> = editor.catalog().all().iter().map(|t| t.id).collect();
        bail!("Unknown theme '{}'. Available: {}", id, known.join(", "));
    }

    editor.set_theme(id);
    if ctx.output.is_json() {
        ctx.output.json(&flyer_status(&editor));
    } else {
        ctx.output.success(&format!("Theme set to {}", editor.theme().name));
    }
    Ok(())
}

/// Run the store command.
pub fn store(args: StoreArgs, ctx: &Context) -> Result<()> {
    if args.name.is_none() && args.address.is_none() {
        bail!("Nothing to change. Pass --name and/or --address.");
    }

    let mut editor = ctx.editor();
    if let Some(name) = args.name {
        editor.set_store_name(name);
    }
    if let Some(address) = args.address {
        editor.set_store_address(address);
    }

    if ctx.output.is_json() {
        ctx.output.json(&flyer_status(&editor));
        return Ok(());
    }

    let flyer = editor.flyer();
    ctx.output.success("Store details updated");
    ctx.output.kv("name", &flyer.store_name);
    ctx.output.kv("address", &flyer.store_address);
    Ok(())
}

/// Run the valid-until command.
pub fn valid_until(args: ValidUntilArgs, ctx: &Context) -> Result<()> {
    let mut editor = ctx.editor();
    editor.set_valid_until(args.text);

    if ctx.output.is_json() {
        ctx.output.json(&flyer_status(&editor));
        return Ok(());
    }

    match editor.preview().validity_badge {
        Some(badge) => ctx.output.success(&badge),
        None => ctx.output.success("Validity cleared"),
    }
    Ok(())
}

/// JSON status for the flyer-level setters.
fn flyer_status(editor: &FlyerEditor) -> serde_json::Value {
    let flyer = editor.flyer();
    json!({
        "status": "applied",
        "themeId": editor.theme().id,
        "storeName": flyer.store_name,
        "storeAddress": flyer.store_address,
        "validUntil": flyer.valid_until,
        "validityBadge": editor.preview().validity_badge,
    })
}
