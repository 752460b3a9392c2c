//! Price filter state carried in the page URL.
//!
//! The URL is the only place the filter lives. A submitted form lands on the
//! catalog with raw `minPrice` / `maxPrice` values; they are clamped into the
//! configured bounds and written back as a canonical query in which a bound
//! only appears when it actually narrows the catalog.

use url::form_urlencoded;

use super::{format_price, PriceBounds};

/// Query parameter holding the lower price bound.
pub const MIN_PRICE_PARAM: &str = "minPrice";

/// Query parameter holding the upper price bound.
pub const MAX_PRICE_PARAM: &str = "maxPrice";

/// An applied price filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFilter {
    min: f64,
    max: f64,
    bounds: PriceBounds,
}

impl PriceFilter {
    /// A filter that lets every product through.
    #[must_use]
    pub fn unfiltered(bounds: PriceBounds) -> Self {
        Self {
            min: bounds.floor,
            max: bounds.ceiling,
            bounds,
        }
    }

    /// Apply user input to the bounds.
    ///
    /// Unset or zero inputs fall back to the corresponding bound, then each
    /// end is clamped into `floor..=ceiling`. The ends are not reordered, so a
    /// minimum above the maximum yields an empty result.
    #[must_use]
    pub fn apply(min: Option<f64>, max: Option<f64>, bounds: PriceBounds) -> Self {
        let min_or_floor = min.filter(|v| *v != 0.0).unwrap_or(bounds.floor);
        let max_or_ceiling = max.filter(|v| *v != 0.0).unwrap_or(bounds.ceiling);

        Self {
            min: bounds.floor.max(min_or_floor.min(bounds.ceiling)),
            max: bounds.ceiling.min(max_or_ceiling.max(bounds.floor)),
            bounds,
        }
    }

    /// Read the filter from a raw query string.
    ///
    /// Missing, empty, and non-numeric values are treated as unset. When a
    /// parameter repeats, the first occurrence wins.
    #[must_use]
    pub fn from_query(raw_query: Option<&str>, bounds: PriceBounds) -> Self {
        let mut min = None;
        let mut max = None;

        for (key, value) in form_urlencoded::parse(raw_query.unwrap_or_default().as_bytes()) {
            match &*key {
                MIN_PRICE_PARAM if min.is_none() => min = Some(parse_float(&value)),
                MAX_PRICE_PARAM if max.is_none() => max = Some(parse_float(&value)),
                _ => {}
            }
        }

        Self::apply(min.flatten(), max.flatten(), bounds)
    }

    /// Lower end of the filter.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper end of the filter.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The bounds this filter was clamped to.
    #[must_use]
    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    /// Whether the filter excludes anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.min > self.bounds.floor || self.max < self.bounds.ceiling
    }

    /// The `minPrice` value to carry in the URL, if any.
    #[must_use]
    pub fn min_param(&self) -> Option<f64> {
        (self.min > self.bounds.floor).then_some(self.min)
    }

    /// The `maxPrice` value to carry in the URL, if any.
    #[must_use]
    pub fn max_param(&self) -> Option<f64> {
        (self.max < self.bounds.ceiling).then_some(self.max)
    }

    /// Human-readable range, e.g. `$10.00 - $50.00`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", format_price(self.min), format_price(self.max))
    }

    /// The canonical form of `raw_query` for this filter.
    ///
    /// Unrelated parameters keep their position. A price parameter already in
    /// the query is updated in place; a new one is appended. Parameters are
    /// re-encoded after decoding, so bytes that are not UTF-8 are replaced
    /// with U+FFFD. The result is its own canonical form.
    #[must_use]
    pub fn to_query(&self, raw_query: Option<&str>) -> String {
        let mut pairs = parse_pairs(raw_query);
        set_or_remove(&mut pairs, MIN_PRICE_PARAM, self.min_param());
        set_or_remove(&mut pairs, MAX_PRICE_PARAM, self.max_param());
        serialize(&pairs)
    }

    /// `raw_query` with both price parameters removed.
    #[must_use]
    pub fn cleared_query(raw_query: Option<&str>) -> String {
        let mut pairs = parse_pairs(raw_query);
        pairs.retain(|(key, _)| key != MIN_PRICE_PARAM && key != MAX_PRICE_PARAM);
        serialize(&pairs)
    }

    /// Join a path and a query, dropping the `?` when the query is empty.
    #[must_use]
    pub fn href(path: &str, query: &str) -> String {
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

fn parse_pairs(raw_query: Option<&str>) -> Vec<(String, String)> {
    form_urlencoded::parse(raw_query.unwrap_or_default().as_bytes())
        .into_owned()
        .collect()
}

fn serialize(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn set_or_remove(pairs: &mut Vec<(String, String)>, key: &str, value: Option<f64>) {
    let Some(value) = value else {
        pairs.retain(|(k, _)| k != key);
        return;
    };

    let value = value.to_string();
    match pairs.iter().position(|(k, _)| k == key) {
        Some(first) => {
            pairs[first].1 = value;
            let mut index = 0;
            pairs.retain(|(k, _)| {
                let keep = k != key || index == first;
                index += 1;
                keep
            });
        }
        None => pairs.push((key.to_string(), value)),
    }
}

/// Parse the leading decimal number of `raw`, ignoring trailing text.
///
/// `Infinity` (optionally signed) and overflowing literals parse to an
/// infinite value, which the clamp in [`PriceFilter::apply`] then pins to a
/// bound.
fn parse_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> PriceBounds {
        PriceBounds::default()
    }

    #[test]
    fn test_unfiltered() {
        let filter = PriceFilter::unfiltered(bounds());

        assert!(!filter.is_active());
        assert_eq!(filter.to_query(None), "");
        assert_eq!(filter.label(), "$0.00 - $1000.00");
    }

    #[test]
    fn test_from_query() {
        let filter = PriceFilter::from_query(Some("minPrice=10&maxPrice=50"), bounds());

        assert!((filter.min() - 10.0).abs() < f64::EPSILON);
        assert!((filter.max() - 50.0).abs() < f64::EPSILON);
        assert!(filter.is_active());
        assert_eq!(filter.label(), "$10.00 - $50.00");
    }

    #[test]
    fn test_from_query_empty_values_are_unset() {
        let filter = PriceFilter::from_query(Some("minPrice=&maxPrice="), bounds());
        assert_eq!(filter, PriceFilter::unfiltered(bounds()));
    }

    #[test]
    fn test_from_query_non_numeric_is_unset() {
        let filter = PriceFilter::from_query(Some("minPrice=cheap&maxPrice=20"), bounds());

        assert!((filter.min() - 0.0).abs() < f64::EPSILON);
        assert!((filter.max() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_query_numeric_prefix() {
        let filter = PriceFilter::from_query(Some("minPrice=12.5usd"), bounds());
        assert!((filter.min() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_query_first_occurrence_wins() {
        let filter = PriceFilter::from_query(Some("minPrice=5&minPrice=9"), bounds());
        assert!((filter.min() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_clamps_to_bounds() {
        let filter = PriceFilter::apply(Some(-20.0), Some(5000.0), bounds());

        assert!((filter.min() - 0.0).abs() < f64::EPSILON);
        assert!((filter.max() - 1000.0).abs() < f64::EPSILON);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_apply_min_above_ceiling() {
        let filter = PriceFilter::apply(Some(2000.0), None, bounds());
        assert!((filter.min() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_zero_max_means_unset() {
        let filter = PriceFilter::apply(None, Some(0.0), bounds());
        assert!((filter.max() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_keeps_inverted_range() {
        let filter = PriceFilter::apply(Some(50.0), Some(10.0), bounds());

        assert!((filter.min() - 50.0).abs() < f64::EPSILON);
        assert!((filter.max() - 10.0).abs() < f64::EPSILON);
        assert!(filter.is_active());
    }

    #[test]
    fn test_to_query_omits_default_bounds() {
        let filter = PriceFilter::apply(Some(10.0), None, bounds());
        assert_eq!(filter.to_query(None), "minPrice=10");

        let filter = PriceFilter::apply(None, Some(49.5), bounds());
        assert_eq!(filter.to_query(None), "maxPrice=49.5");
    }

    #[test]
    fn test_to_query_drops_empty_inputs() {
        let raw = Some("minPrice=&maxPrice=50");
        let filter = PriceFilter::from_query(raw, bounds());
        assert_eq!(filter.to_query(raw), "maxPrice=50");
    }

    #[test]
    fn test_to_query_preserves_other_params() {
        let raw = Some("sort=asc&minPrice=10&view=grid");
        let filter = PriceFilter::from_query(raw, bounds());
        assert_eq!(filter.to_query(raw), "sort=asc&minPrice=10&view=grid");
    }

    #[test]
    fn test_to_query_updates_in_place_and_dedupes() {
        let raw = Some("minPrice=5&x=1&minPrice=9");
        let filter = PriceFilter::apply(Some(7.0), None, bounds());
        assert_eq!(filter.to_query(raw), "minPrice=7&x=1");
    }

    #[test]
    fn test_to_query_is_a_fixed_point() {
        let raw = Some("maxPrice=&minPrice=0012.50&q=a+b");
        let filter = PriceFilter::from_query(raw, bounds());
        let canonical = filter.to_query(raw);

        let again = PriceFilter::from_query(Some(&canonical), bounds());
        assert_eq!(again, filter);
        assert_eq!(again.to_query(Some(&canonical)), canonical);
    }

    #[test]
    fn test_to_query_non_utf8_param_settles() {
        let raw = Some("x=%FF&minPrice=20");
        let filter = PriceFilter::from_query(raw, bounds());
        let canonical = filter.to_query(raw);
        assert_ne!(canonical, "x=%FF&minPrice=20");
        assert!(canonical.ends_with("&minPrice=20"));

        let again = PriceFilter::from_query(Some(&canonical), bounds());
        assert_eq!(again.to_query(Some(&canonical)), canonical);
    }

    #[test]
    fn test_cleared_query() {
        assert_eq!(
            PriceFilter::cleared_query(Some("minPrice=1&q=shoes&maxPrice=9")),
            "q=shoes"
        );
        assert_eq!(PriceFilter::cleared_query(None), "");
    }

    #[test]
    fn test_href() {
        assert_eq!(PriceFilter::href("/", ""), "/");
        assert_eq!(PriceFilter::href("/", "minPrice=10"), "/?minPrice=10");
    }

    #[test]
    fn test_custom_bounds() {
        let bounds = PriceBounds {
            floor: 5.0,
            ceiling: 100.0,
            step: 1.0,
        };
        let filter = PriceFilter::from_query(Some("minPrice=1&maxPrice=100"), bounds);

        assert!((filter.min() - 5.0).abs() < f64::EPSILON);
        assert!(!filter.is_active());
        assert_eq!(filter.to_query(None), "");
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("10"), Some(10.0));
        assert_eq!(parse_float(" 2.5"), Some(2.5));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("-3"), Some(-3.0));
        assert_eq!(parse_float("1e2"), Some(100.0));
        assert_eq!(parse_float("7e"), Some(7.0));
        assert_eq!(parse_float("4.2.1"), Some(4.2));
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("-"), None);
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("+Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float(" -Infinityx"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float("1e999"), Some(f64::INFINITY));
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("infinity"), None);
    }

    #[test]
    fn test_infinite_min_clamps_to_ceiling() {
        let raw = Some("minPrice=Infinity");
        let filter = PriceFilter::from_query(raw, bounds());

        assert!((filter.min() - 1000.0).abs() < f64::EPSILON);
        assert!(filter.is_active());

        let canonical = filter.to_query(raw);
        assert_eq!(canonical, "minPrice=1000");
        assert_eq!(PriceFilter::from_query(Some(&canonical), bounds()), filter);
    }

    #[test]
    fn test_infinite_max_is_no_limit() {
        let filter = PriceFilter::from_query(Some("maxPrice=Infinity"), bounds());
        assert!(!filter.is_active());
        assert_eq!(filter.to_query(Some("maxPrice=Infinity")), "");
    }
}
