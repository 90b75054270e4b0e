//! Print every product matching a term.

use anyhow::{bail, Result};
use turbo_store::{FetchOutcome, ProductListView};

use super::SearchArgs;
use crate::context::Context;
use crate::render;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront();
    let mut view = ProductListView::new(&shop);
    view.set_draft(args.term);

    let spinner = ctx.output.spinner("Searching...");
    let outcome = view.submit_search(&mut shop).await;
    spinner.finish_and_clear();

    if let Some(FetchOutcome::Rejected(err)) = outcome {
        bail!("Search for \"{}\" failed: {}", shop.products().search_term(), err);
    }

    if ctx.output.is_json() {
        ctx.output.json(&shop.products().items());
        return Ok(());
    }

    let term = shop.products().search_term();
    if term.is_empty() {
        ctx.output.header("Products, page 1");
    } else {
        ctx.output.header(&format!("Results for \"{}\"", term));
    }
    for line in render::product_grid(view.display(&shop)) {
        ctx.output.line(&line);
    }
    Ok(())
}
