//! Text output for the catalog commands.

use std::fmt::Write as _;

use crate::price::format_price;
use crate::product::Product;

const TITLE_WIDTH: usize = 48;

/// One line per product: `#id  $price  title`.
#[must_use]
pub fn products_plain(products: &[&Product]) -> String {
    products.iter().fold(String::new(), |mut out, p| {
        let _ = writeln!(out, "#{}  {}  {}", p.id, format_price(p.price), p.title);
        out
    })
}

/// An aligned table of products.
#[must_use]
pub fn product_table(products: &[&Product]) -> String {
    let mut out = format!(
        "{:>4}  {:>10}  {:<width$}  {:<18}  {}\n",
        "ID",
        "PRICE",
        "TITLE",
        "CATEGORY",
        "RATING",
        width = TITLE_WIDTH
    );
    let _ = writeln!(out, "{}", "-".repeat(4 + 2 + 10 + 2 + TITLE_WIDTH + 2 + 18 + 2 + 6));

    for p in products {
        let _ = writeln!(
            out,
            "{:>4}  {:>10}  {:<width$}  {:<18}  {} ({})",
            p.id,
            format_price(p.price),
            truncate(&p.title, TITLE_WIDTH),
            truncate(&p.category, 18),
            p.rating.rate,
            p.rating.count,
            width = TITLE_WIDTH
        );
    }
    out
}

/// A multi-line description of a single product.
#[must_use]
pub fn product_details(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.title);
    let _ = writeln!(out, "{}", "=".repeat(product.title.chars().count()));
    let _ = writeln!(out);
    let _ = writeln!(out, "Product ID:  #{}", product.id);
    let _ = writeln!(out, "Price:       {}", format_price(product.price));
    let _ = writeln!(out, "Category:    {}", product.category);
    let _ = writeln!(
        out,
        "Rating:      {}/5 ({} reviews)",
        product.rating.rate, product.rating.count
    );
    let _ = writeln!(out, "Image:       {}", product.image);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", product.description);
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
