//! Print one page of the catalog.

use anyhow::{bail, Result};
use turbo_store::{FetchOutcome, ProductAction, ProductListView};

use super::ListArgs;
use crate::context::Context;
use crate::render;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront();
    shop.update_products(ProductAction::SetPage(args.page));

    let spinner = ctx.output.spinner("Loading products...");
    let outcome = shop.sync().await;
    spinner.finish_and_clear();

    if let Some(FetchOutcome::Rejected(err)) = outcome {
        bail!("Failed to fetch page {}: {}", shop.products().current_page(), err);
    }

    if ctx.output.is_json() {
        ctx.output.json(&shop.products().items());
        return Ok(());
    }

    let view = ProductListView::new(&shop);
    ctx.output
        .header(&format!("Products, page {}", shop.products().current_page()));
    for line in render::product_grid(view.display(&shop)) {
        ctx.output.line(&line);
    }
    Ok(())
}
