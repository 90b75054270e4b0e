//! Interactive browse session: the product list page plus the cart.

use anyhow::{Context as _, Result};
use dialoguer::Input;
use turbo_commerce::ProductId;
use turbo_store::{
    CartAction, CatalogApi, FetchOutcome, ProductAction, ProductListView, Storefront,
};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::Output;
use crate::render;

const HELP: &[&str] = &[
    "search <term>     commit a search (empty term clears it)",
    "next | prev       change page",
    "page <n>          jump to a page",
    "add <id>          add a product from the grid to the cart",
    "remove <id>       remove a line from the cart",
    "qty <id> <n>      set a line's quantity (0 removes)",
    "cart              show the cart",
    "refresh           reload the current page",
    "quit              leave",
];

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Search(String),
    Next,
    Previous,
    Page(u32),
    Add(ProductId),
    Remove(ProductId),
    Quantity(ProductId, i64),
    Cart,
    Refresh,
    Help,
    Quit,
    Noop,
}

fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let id = |s: &str| {
        s.parse::<ProductId>()
            .map_err(|_| format!("'{}' is not a product id", s))
    };

    match head.to_lowercase().as_str() {
        "" => Ok(BrowseCommand::Noop),
        "search" | "s" => Ok(BrowseCommand::Search(rest.to_string())),
        "clear" => Ok(BrowseCommand::Search(String::new())),
        "next" | "n" => Ok(BrowseCommand::Next),
        "prev" | "p" => Ok(BrowseCommand::Previous),
        "page" => rest
            .parse()
            .map(BrowseCommand::Page)
            .map_err(|_| format!("'{}' is not a page number", rest)),
        "add" | "a" => id(rest).map(BrowseCommand::Add),
        "remove" | "rm" => id(rest).map(BrowseCommand::Remove),
        "qty" => {
            let (id_part, qty_part) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: qty <id> <quantity>".to_string())?;
            let quantity = qty_part
                .trim()
                .parse()
                .map_err(|_| format!("'{}' is not a quantity", qty_part.trim()))?;
            Ok(BrowseCommand::Quantity(id(id_part)?, quantity))
        }
        "cart" | "c" => Ok(BrowseCommand::Cart),
        "refresh" | "r" => Ok(BrowseCommand::Refresh),
        "help" | "h" | "?" => Ok(BrowseCommand::Help),
        "quit" | "q" | "exit" => Ok(BrowseCommand::Quit),
        other => Err(format!("Unknown command '{}', type 'help'", other)),
    }
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront();
    let mut view = ProductListView::new(&shop);

    let outcome = match args.search {
        Some(term) => {
            view.set_draft(term);
            with_spinner(&ctx.output, view.submit_search(&mut shop)).await
        }
        None => with_spinner(&ctx.output, view.mount(&mut shop)).await,
    };
    report(outcome);
    draw(&ctx.output, &view, &shop);

    loop {
        let line: String = Input::new()
            .with_prompt("shop")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                ctx.output.warn(&msg);
                continue;
            }
        };

        let outcome = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Noop => continue,
            BrowseCommand::Help => {
                HELP.iter().for_each(|h| ctx.output.list_item(h));
                continue;
            }
            BrowseCommand::Cart => {
                show_cart(&ctx.output, &shop);
                continue;
            }
            BrowseCommand::Add(id) => {
                match view.add_to_cart(&mut shop, id) {
                    Ok(()) => ctx.output.success(&format!("Added {} to the cart", id)),
                    Err(e) => ctx.output.warn(&e.to_string()),
                }
                continue;
            }
            BrowseCommand::Remove(id) => {
                if shop.cart().cart().get(id).is_none() {
                    ctx.output.info(&format!("{} is not in the cart", id));
                } else {
                    shop.dispatch_cart(CartAction::Remove(id))?;
                    ctx.output.success(&format!("Removed {} from the cart", id));
                }
                continue;
            }
            BrowseCommand::Quantity(id, quantity) => {
                match shop.dispatch_cart(CartAction::SetQuantity { id, quantity }) {
                    Ok(()) => show_cart(&ctx.output, &shop),
                    Err(e) => ctx.output.warn(&e.to_string()),
                }
                continue;
            }
            BrowseCommand::Search(term) => {
                view.set_draft(term);
                with_spinner(&ctx.output, view.submit_search(&mut shop)).await
            }
            BrowseCommand::Next => with_spinner(&ctx.output, view.next_page(&mut shop)).await,
            BrowseCommand::Previous => {
                if !view.can_go_previous(&shop) {
                    ctx.output.info("Already on the first page");
                    continue;
                }
                with_spinner(&ctx.output, view.previous_page(&mut shop)).await
            }
            BrowseCommand::Page(page) => {
                with_spinner(
                    &ctx.output,
                    shop.dispatch_product(ProductAction::SetPage(page)),
                )
                .await
            }
            BrowseCommand::Refresh => {
                Some(with_spinner(&ctx.output, shop.refresh()).await)
            }
        };

        report(outcome);
        draw(&ctx.output, &view, &shop);
    }

    view.unmount(&mut shop);
    show_cart(&ctx.output, &shop);
    Ok(())
}

async fn with_spinner<F: std::future::Future>(output: &Output, fut: F) -> F::Output {
    let spinner = output.spinner("Loading...");
    let result = fut.await;
    spinner.finish_and_clear();
    result
}

fn report(outcome: Option<FetchOutcome>) {
    match outcome {
        Some(FetchOutcome::Rejected(err)) => tracing::debug!(error = %err, "browse fetch rejected"),
        Some(FetchOutcome::Discarded { seq }) => tracing::debug!(seq, "browse fetch superseded"),
        _ => {}
    }
}

fn draw<C: CatalogApi>(output: &Output, view: &ProductListView, shop: &Storefront<C>) {
    let products = shop.products();
    output.header(&match products.search_term() {
        "" => format!("Products, page {}", products.current_page()),
        term => format!("Results for \"{}\"", term),
    });
    for line in render::product_grid(view.display(shop)) {
        output.line(&line);
    }
    output.line(&render::pagination(
        products.current_page(),
        products.search_term(),
        view.can_go_previous(shop),
    ));
}

fn show_cart<C: CatalogApi>(output: &Output, shop: &Storefront<C>) {
    output.header("Cart");
    for line in render::cart_summary(shop.cart().cart()) {
        output.line(&line);
    }
}
