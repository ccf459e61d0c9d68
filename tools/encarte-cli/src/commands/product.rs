//! Product list commands.

use anyhow::{bail, Result};
use encarte_core::prelude::*;

use super::{AddArgs, ClearArgs, ImagesArgs, RemoveArgs, TerminalConfirm};
use crate::context::Context;

/// Run the add command.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut editor = ctx.editor();

    let mut input = ProductInput::new(&args.name, &args.price).adult(args.adult);
    if let Some(offer) = args.offer {
        input = input.with_offer(offer);
    }
    if let Some(image) = args.image {
        input = input.with_image(image);
    } else if args.auto_image {
        match image_candidates(&KnownProductImages, &args.name).into_iter().next() {
            Some(url) => input = input.with_image(url),
            None => ctx.output.warn("No known image for this product"),
        }
    }

    let id = match editor.add_product(input) {
        Ok(id) => id,
        Err(e) => bail!("Product not added: {}", e),
    };

    if ctx.output.is_json() {
        let product = editor.flyer().products.iter().find(|p| p.id == id);
        ctx.output.json(&product);
    } else {
        ctx.output.success(&format!("Added {} ({})", args.name.trim(), id));
    }
    Ok(())
}

/// Run the remove command.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut editor = ctx.editor();
    let mut confirm = TerminalConfirm::new(args.yes);
    let outcome = editor.remove_product(&ProductId::new(args.id.as_str()), &mut confirm);
    report(ctx, outcome, &format!("Removed {}", args.id), &format!("No product with id {}", args.id))
}

/// Run the clear command.
pub fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut editor = ctx.editor();
    let mut confirm = TerminalConfirm::new(args.yes);
    let outcome = editor.clear_products(&mut confirm);
    report(ctx, outcome, "Cleared all products", "Nothing to clear")
}

fn report(ctx: &Context, outcome: EditOutcome, applied: &str, not_found: &str) -> Result<()> {
    if ctx.output.is_json() {
        let status = match outcome {
            EditOutcome::Applied => "applied",
            EditOutcome::Cancelled => "cancelled",
            EditOutcome::NotFound => "not_found",
        };
        ctx.output.json(&serde_json::json!({ "status": status }));
        return Ok(());
    }

    match outcome {
        EditOutcome::Applied => ctx.output.success(applied),
        EditOutcome::Cancelled => ctx.output.warn("Cancelled"),
        EditOutcome::NotFound => ctx.output.warn(not_found),
    }
    Ok(())
}

/// Run the images command.
pub fn images(args: ImagesArgs, ctx: &Context) -> Result<()> {
    let urls = image_candidates(&KnownProductImages, &args.name);

    if ctx.output.is_json() {
        ctx.output.json(&urls);
        return Ok(());
    }

    if urls.is_empty() {
        ctx.output.info(&format!("No images found for \"{}\"", args.name.trim()));
    }
    for url in &urls {
        ctx.output.list_item(url);
    }
    Ok(())
}
