//! The product grid with its price filter.

use url::form_urlencoded;

use super::{escape, layout, CATALOG_DESCRIPTION, CATALOG_TITLE};
use crate::price::{filter_products_by_price, PriceFilter, MAX_PRICE_PARAM, MIN_PRICE_PARAM};
use crate::product::Product;

/// Render the catalog page for `products` under `filter`.
///
/// `raw_query` is the canonical query the page was requested with; it is
/// used to keep unrelated parameters alive across filter submissions.
#[must_use]
pub fn catalog_page(products: &[Product], filter: &PriceFilter, raw_query: Option<&str>) -> String {
    let visible = filter_products_by_price(products, filter.min(), filter.max());
    let clear_href = PriceFilter::href("/", &PriceFilter::cleared_query(raw_query));

    let mut body = String::from("<div class=\"container\">\n");
    body.push_str("<h1 class=\"page-title\">E-commerce Product Catalog</h1>\n");
    body.push_str(&filter_panel(filter, raw_query, &clear_href));

    body.push_str(&format!(
        "<div class=\"results-count\">Showing {} of {} products",
        visible.len(),
        products.len()
    ));
    if filter.is_active() {
        body.push_str(&format!(
            "<span class=\"filter-note\">(filtered by price: {})</span>",
            filter.label()
        ));
    }
    body.push_str("</div>\n");

    body.push_str(
        "<div data-testid=\"product-grid\" \
         class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4\">\n",
    );
    for product in &visible {
        body.push_str(&product_card(product));
    }
    body.push_str("</div>\n");

    if visible.is_empty() && !products.is_empty() {
        body.push_str(&format!(
            "<div class=\"empty\">No products found in the selected price range.<br>\
             <a href=\"{}\">Clear filters</a></div>\n",
            escape(&clear_href)
        ));
    }

    if products.is_empty() {
        body.push_str("<div class=\"empty\">No products available.</div>\n");
    }

    body.push_str("</div>");
    layout(CATALOG_TITLE, Some(CATALOG_DESCRIPTION), &body)
}

fn filter_panel(filter: &PriceFilter, raw_query: Option<&str>, clear_href: &str) -> String {
    let bounds = filter.bounds();

    // Other query parameters ride along with the form submission
    let hidden: String = form_urlencoded::parse(raw_query.unwrap_or_default().as_bytes())
        .filter(|(key, _)| key != MIN_PRICE_PARAM && key != MAX_PRICE_PARAM)
        .map(|(key, value)| {
            format!(
                "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
                escape(&key),
                escape(&value)
            )
        })
        .collect();

    let input = |id: &str, label: &str, placeholder: &str, value: Option<f64>| {
        format!(
            "<div>\n<label for=\"{id}\">{label}</label>\n\
             <input id=\"{id}\" name=\"{id}\" type=\"number\" min=\"{min}\" max=\"{max}\" \
             step=\"{step}\" value=\"{value}\" placeholder=\"{placeholder}\">\n</div>\n",
            min = bounds.floor,
            max = bounds.ceiling,
            step = bounds.step,
            value = value.map(|v| v.to_string()).unwrap_or_default(),
        )
    };

    format!(
        "<form class=\"price-filter\" method=\"get\" action=\"/\">\n\
         <h3>Filter by Price</h3>\n{hidden}\
         <div class=\"price-inputs\">\n{min_input}{max_input}</div>\n\
         <div class=\"price-actions\">\n\
         <div class=\"price-range\">{label}</div>\n\
         <div>\n<a class=\"button-secondary\" role=\"button\" href=\"{clear}\">Clear</a>\n\
         <button type=\"submit\" class=\"button-primary\">Apply Filter</button>\n</div>\n\
         </div>\n</form>\n",
        min_input = input(MIN_PRICE_PARAM, "Min Price", "Min", filter.min_param()),
        max_input = input(MAX_PRICE_PARAM, "Max Price", "Max", filter.max_param()),
        label = filter.label(),
        clear = escape(clear_href),
    )
}

fn product_card(product: &Product) -> String {
    let href = product.href();
    let title = escape(&product.title);

    format!(
        "<div data-testid=\"product-card\" class=\"product-card\">\n\
         <a href=\"{href}\"><img src=\"{image}\" alt=\"{title}\" width=\"200\" height=\"200\" \
         class=\"card-image\"></a>\n\
         <h2 class=\"card-title\">{title}</h2>\n\
         <p class=\"card-description\">{description}</p>\n\
         <div class=\"card-row\">\n\
         <span data-testid=\"product-price\" class=\"price\">${price}</span>\n\
         <span class=\"category\">{category}</span>\n</div>\n\
         <div class=\"card-row\">\n\
         <div class=\"rating\"><span class=\"star\">\u{2605}</span> \
         <span>{rate} ({count})</span></div>\n\
         <a href=\"{href}\" class=\"button-primary\">View Details</a>\n</div>\n</div>\n",
        image = escape(&product.image),
        description = escape(&product.description),
        price = product.price,
        category = escape(&product.category),
        rate = product.rating.rate,
        count = product.rating.count,
    )
}
