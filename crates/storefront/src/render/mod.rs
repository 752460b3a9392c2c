//! Server-side HTML rendering.
//!
//! Views are plain functions from data to a complete HTML document. Every
//! piece of upstream or user text goes through [`escape`] before it is
//! interpolated.

mod catalog;
mod detail;
mod pages;

pub use catalog::catalog_page;
pub use detail::product_page;
pub use pages::{error_page, not_found_page, product_not_found_page};

/// Store name used in page titles.
pub const SITE_NAME: &str = "Telecom Store";

/// Title of the catalog page.
pub const CATALOG_TITLE: &str = "E-commerce Product Catalog - Telecom Store";

/// Meta description of the catalog page.
pub const CATALOG_DESCRIPTION: &str = "Browse our collection of products with advanced filtering options. Find the perfect items with our price range filters.";

const STYLESHEET: &str = r"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,sans-serif;color:#111827;background:#f9fafb}
a{color:#2563eb}
.container{max-width:80rem;margin:0 auto;padding:2rem 1rem}
.page-title{font-size:1.875rem;font-weight:700;text-align:center;margin-bottom:2rem}
.price-filter{background:#1f2937;color:#fff;padding:1rem;border-radius:.5rem;margin-bottom:2rem}
.price-filter label{display:block;font-size:.875rem;color:#d1d5db;margin-bottom:.25rem}
.price-filter input{width:100%;padding:.5rem .75rem;background:#374151;border:1px solid #4b5563;border-radius:.375rem;color:#fff}
.price-inputs{display:grid;grid-template-columns:1fr 1fr;gap:1rem;margin-bottom:1rem}
.price-actions{display:flex;justify-content:space-between;align-items:center}
.price-range{font-size:.875rem;color:#9ca3af}
.results-count{font-size:.875rem;color:#4b5563;margin-bottom:1.5rem}
.filter-note{margin-left:.5rem;color:#2563eb}
.grid{display:grid;gap:1.5rem}
.grid-cols-1{grid-template-columns:repeat(1,minmax(0,1fr))}
@media(min-width:768px){.md\:grid-cols-2{grid-template-columns:repeat(2,minmax(0,1fr))}}
@media(min-width:1024px){.lg\:grid-cols-3{grid-template-columns:repeat(3,minmax(0,1fr))}}
@media(min-width:1280px){.xl\:grid-cols-4{grid-template-columns:repeat(4,minmax(0,1fr))}}
.product-card{background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;padding:1rem}
.card-image{width:100%;height:12rem;object-fit:contain;margin-bottom:1rem}
.card-row{display:flex;justify-content:space-between;align-items:center;margin-bottom:.5rem}
.price{font-size:1.25rem;font-weight:700;color:#16a34a}
.category{font-size:.875rem;color:#6b7280;text-transform:capitalize}
.star{color:#eab308}
.button-primary{background:#2563eb;color:#fff;border:0;padding:.5rem 1rem;border-radius:.375rem;text-decoration:none;cursor:pointer}
.button-secondary{color:#9ca3af;padding:.25rem .75rem;text-decoration:none}
.empty{text-align:center;color:#6b7280;padding:2rem 0}
.detail{display:grid;grid-template-columns:repeat(auto-fit,minmax(20rem,1fr));gap:2rem}
.detail-image{width:100%;max-width:28rem;height:auto;object-fit:contain}
.badge{display:inline-block;padding:.25rem .75rem;background:#f3f4f6;border-radius:9999px;font-size:.875rem;text-transform:capitalize}
.facts{display:grid;grid-template-columns:1fr 1fr;gap:1rem;font-size:.875rem;border-top:1px solid #e5e7eb;padding-top:1.5rem}
.notice{text-align:center;max-width:28rem;margin:0 auto;padding:4rem 0}
.error-title{color:#dc2626}
";

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the document shell.
#[must_use]
pub fn layout(title: &str, description: Option<&str>, body: &str) -> String {
    let description = description
        .map(|d| format!("<meta name=\"description\" content=\"{}\">\n", escape(d)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n{description}<style>{STYLESHEET}</style>\n\
         </head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_layout() {
        let html = layout(CATALOG_TITLE, Some(CATALOG_DESCRIPTION), "<p>hi</p>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>E-commerce Product Catalog - Telecom Store</title>"));
        assert!(html.contains("name=\"description\""));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn test_layout_escapes_title() {
        let html = layout("<script>", None, "");

        assert!(html.contains("<title>&lt;script&gt;</title>"));
        assert!(!html.contains("name=\"description\""));
    }
}
