//! Single product view.

use super::{escape, layout, SITE_NAME};
use crate::product::Product;

/// Render the detail page for `product`.
#[must_use]
pub fn product_page(product: &Product) -> String {
    let title = escape(&product.title);
    let category = escape(&product.category);
    let rate = product.rating.rate;
    let count = product.rating.count;

    let body = format!(
        "<div class=\"container\">\n\
         <div class=\"back\"><a href=\"/\">\u{2190} Back to Products</a></div>\n\
         <div class=\"detail\">\n\
         <div class=\"detail-media\">\n\
         <img data-testid=\"product-image\" src=\"{image}\" alt=\"{title}\" width=\"400\" \
         height=\"400\" class=\"detail-image\">\n</div>\n\
         <div class=\"detail-info\">\n\
         <span class=\"badge\">{category}</span>\n\
         <h1 data-testid=\"product-title\">{title}</h1>\n\
         <div class=\"card-row\">\n\
         <span data-testid=\"product-price\" class=\"price\">${price}</span>\n\
         <div data-testid=\"product-rating\" class=\"rating\"><span class=\"star\">\u{2605}</span> \
         <strong>{rate}</strong> <span>({count} reviews)</span></div>\n</div>\n\
         <h2>Description</h2>\n\
         <p data-testid=\"product-description\">{description}</p>\n\
         <div class=\"actions\">\n\
         <button type=\"button\" class=\"button-primary\">Add to Cart</button>\n\
         <button type=\"button\" class=\"button-secondary\">Add to Wishlist</button>\n</div>\n\
         <div class=\"facts\">\n\
         <div><strong>Category:</strong> <span class=\"category\">{category}</span></div>\n\
         <div><strong>Product ID:</strong> #{id}</div>\n\
         <div><strong>Rating:</strong> {rate}/5</div>\n\
         <div><strong>Reviews:</strong> {count}</div>\n\
         </div>\n</div>\n</div>\n</div>",
        image = escape(&product.image),
        price = product.price,
        description = escape(&product.description),
        id = product.id,
    );

    layout(
        &format!("{} - {SITE_NAME}", product.title),
        Some(&product.description),
        &body,
    )
}
