//! Not-found and error pages.

use super::{escape, layout, SITE_NAME};

/// Page shown when a product ID is invalid or unknown.
#[must_use]
pub fn product_not_found_page() -> String {
    let body = "<div class=\"container\">\n<div class=\"notice\">\n\
                <h1>Product Not Found</h1>\n\
                <p>The product you are looking for does not exist.</p>\n\
                <a href=\"/\" class=\"button-primary\">Go back to products</a>\n\
                </div>\n</div>";
    layout(&format!("Product Not Found - {SITE_NAME}"), None, body)
}

/// Page shown for any path the server does not route.
#[must_use]
pub fn not_found_page() -> String {
    let body = "<div class=\"container\">\n<div class=\"notice\">\n\
                <h1>404</h1>\n\
                <h2>Product Not Found</h2>\n\
                <p>Sorry, the product you&#39;re looking for doesn&#39;t exist or has been \
                removed.</p>\n\
                <a href=\"/\" class=\"button-primary\">Back to Products</a>\n\
                <p class=\"tip\">Tip: Check the URL or browse our product catalog</p>\n\
                </div>\n</div>";
    layout(&format!("Page Not Found - {SITE_NAME}"), None, body)
}

/// Page shown when the catalog could not be loaded.
///
/// `retry_href` is where "Try again" points, normally the URL that failed.
#[must_use]
pub fn error_page(retry_href: &str) -> String {
    let body = format!(
        "<div class=\"container\">\n<div class=\"notice\">\n\
         <h1 class=\"error-title\">Something went wrong!</h1>\n\
         <p>Failed to load products. Please try again.</p>\n\
         <a href=\"{}\" class=\"button-primary\">Try again</a>\n\
         </div>\n</div>",
        escape(retry_href)
    );
    layout(&format!("Error - {SITE_NAME}"), None, &body)
}
