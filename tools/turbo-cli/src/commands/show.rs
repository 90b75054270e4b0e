//! Print a single product.

use anyhow::{Context as _, Result};
use turbo_store::CatalogApi;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{format_price, format_rating};
use crate::render;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading product...");
    let result = ctx.catalog().fetch_product(args.id).await;
    spinner.finish_and_clear();

    let product = result.with_context(|| format!("Failed to fetch product {}", args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.title);
    for line in render::product_card(&product).iter().skip(1) {
        ctx.output.line(line);
    }
    if !product.description.is_empty() {
        ctx.output.line(&product.description);
    }
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Price", &format_price(product.price));
    ctx.output.kv("Rating", &format_rating(product.rating));
    ctx.output.kv("Stock", &render::stock_label(&product));

    if ctx.output.is_verbose() {
        let optional = [
            ("Brand", product.brand.clone()),
            ("SKU", product.sku.clone()),
            ("Availability", product.availability_status.clone()),
            (
                "Discount",
                product.discount_percentage.map(|d| format!("{:.2}%", d)),
            ),
            ("Weight", product.weight.map(|w| w.to_string())),
            (
                "Dimensions",
                product
                    .dimensions
                    .map(|d| format!("{} x {} x {}", d.width, d.height, d.depth)),
            ),
            ("Warranty", product.warranty_information.clone()),
            ("Returns", product.return_policy.clone()),
            ("Shipping", product.shipping_information.clone()),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                ctx.output.kv(key, &value);
            }
        }
    }

    if !product.reviews.is_empty() {
        ctx.output.header(&format!("Reviews ({})", product.review_count()));
        for review in &product.reviews {
            ctx.output.list_item(&format!(
                "{} ({}): {} [{}]",
                review.reviewer_name,
                format_rating(review.rating),
                review.comment,
                review.date
            ));
        }
    }
    Ok(())
}
