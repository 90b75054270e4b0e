//! Text rendering of the product list page and the cart.

use console::style;
use turbo_commerce::cart::Cart;
use turbo_commerce::catalog::Product;
use turbo_store::ListDisplay;

use crate::output::{format_price, format_rating};

/// One product card: title line plus a details line.
pub fn product_card(product: &Product) -> Vec<String> {
    vec![
        format!(
            "[{}] {}",
            style(product.id).cyan(),
            style(&product.title).bold()
        ),
        format!(
            "     Price: {}  |  {} reviews  |  Rating: {}  |  {}",
            format_price(product.price),
            product.review_count(),
            format_rating(product.rating),
            style(product.detail_path()).dim()
        ),
    ]
}

/// Stock count, or a plain "out of stock".
pub fn stock_label(product: &Product) -> String {
    if product.is_in_stock() {
        format!("{} in stock", product.stock)
    } else {
        "out of stock".to_string()
    }
}

/// The product grid for a list display state.
pub fn product_grid(display: ListDisplay<'_>) -> Vec<String> {
    match display {
        ListDisplay::Loading => vec!["Loading...".to_string()],
        ListDisplay::Empty => vec!["No products found.".to_string()],
        ListDisplay::Failed(err) => vec![format!(
            "{} {}",
            style("Could not load products:").red(),
            err
        )],
        ListDisplay::Products { items, error } => {
            let mut lines = Vec::new();
            if let Some(err) = error {
                lines.push(format!(
                    "{} {}",
                    style("Showing previous results, refresh failed:").yellow(),
                    err
                ));
            }
            lines.extend(items.iter().flat_map(product_card));
            lines
        }
    }
}

/// Page indicator and navigation hint under the grid.
pub fn pagination(page: u32, search: &str, can_go_previous: bool) -> String {
    if !search.is_empty() {
        return format!("All matches for \"{}\"", search);
    }
    let previous = if can_go_previous { "prev" } else { "    " };
    format!("{}  Page {}  next", previous, page)
}

/// Cart contents and totals.
pub fn cart_summary(cart: &Cart) -> Vec<String> {
    if cart.is_empty() {
        return vec!["Your cart is empty.".to_string()];
    }

    let mut lines: Vec<String> = cart
        .items()
        .iter()
        .map(|item| {
            format!(
                "[{}] {} x{} @ {} = {}",
                item.id,
                item.title,
                item.quantity,
                format_price(item.price),
                format_price(item.line_total())
            )
        })
        .collect();
    lines.push(format!(
        "{} item(s), subtotal {}",
        cart.item_count(),
        format_price(cart.subtotal())
    ));
    lines
}
