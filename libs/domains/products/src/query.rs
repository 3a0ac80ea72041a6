//! Filtering, text search and pagination over a product snapshot.
//!
//! Everything here is pure: the same parameters over the same snapshot
//! always produce the same page, in store order.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Product, ProductPage};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 5;

/// Which text fields a search term is matched against
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchScope {
    /// Match the product name only
    #[default]
    Name,
    /// Match the name or the description
    NameAndDescription,
}

impl SearchScope {
    /// `needle` must already be lowercased.
    fn matches(self, product: &Product, needle: &str) -> bool {
        product.name.to_lowercase().contains(needle)
            || (self == SearchScope::NameAndDescription
                && product.description.to_lowercase().contains(needle))
    }
}

/// Query parameters for listing products
///
/// `page` and `limit` are kept as received and read by their leading
/// integer, so `2abc` is page 2 and `3.7` is a limit of 3. Values that do
/// not start with digits fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Keep products in this category (case-insensitive)
    pub category: Option<String>,
    /// Keep products whose name contains this text (case-insensitive)
    pub search: Option<String>,
    /// Page number, starting at 1
    #[param(value_type = Option<i64>, example = 1)]
    pub page: Option<String>,
    /// Page size
    #[param(value_type = Option<i64>, example = 5)]
    pub limit: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Optional sign and digits at the start of `s`, after leading whitespace.
/// Magnitudes past `i64` saturate.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_or(value: &Option<String>, default: i64) -> i64 {
    value
        .as_deref()
        .and_then(leading_integer)
        .unwrap_or(default)
}

impl ProductQuery {
    pub fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub fn search(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    pub fn page(&self) -> i64 {
        parse_or(&self.page, DEFAULT_PAGE)
    }

    pub fn limit(&self) -> i64 {
        parse_or(&self.limit, DEFAULT_LIMIT)
    }
}

/// Query parameters for the search endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text to look for; empty matches everything
    pub q: Option<String>,
}

/// Apply category filter, text search and pagination.
pub fn query(params: &ProductQuery, products: &[Product], scope: SearchScope) -> ProductPage {
    let category = params.category().map(str::to_lowercase);
    let search = params.search().map(str::to_lowercase);

    let matching: Vec<&Product> = products
        .iter()
        .filter(|p| {
            category
                .as_deref()
                .is_none_or(|c| p.category.to_lowercase() == c)
        })
        .filter(|p| search.as_deref().is_none_or(|s| scope.matches(p, s)))
        .collect();

    let page = params.page();
    let limit = params.limit();

    ProductPage {
        page,
        total: matching.len(),
        results: paginate(&matching, page, limit),
    }
}

fn paginate(matching: &[&Product], page: i64, limit: i64) -> Vec<Product> {
    if page < 1 || limit <= 0 {
        return Vec::new();
    }

    let offset = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);

    matching
        .iter()
        .skip(offset)
        .take(limit)
        .map(|p| (*p).clone())
        .collect()
}

/// Unpaginated text search. A missing or empty term matches every product.
pub fn search(term: Option<&str>, products: &[Product], scope: SearchScope) -> Vec<Product> {
    let needle = term.unwrap_or_default().to_lowercase();

    products
        .iter()
        .filter(|p| scope.matches(p, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;

    fn params(
        category: Option<&str>,
        search: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> ProductQuery {
        ProductQuery {
            category: category.map(String::from),
            search: search.map(String::from),
            page: page.map(String::from),
            limit: limit.map(String::from),
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_defaults_return_everything() {
        let page = query(&ProductQuery::default(), &seed_products(), SearchScope::Name);
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 3);
        assert_eq!(ids(&page.results), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_category_is_case_insensitive() {
        let page = query(
            &params(Some("ELECTRONICS"), None, None, None),
            &seed_products(),
            SearchScope::Name,
        );
        assert_eq!(page.total, 2);
        assert_eq!(ids(&page.results), vec!["1", "2"]);
    }

    #[test]
    fn test_search_matches_name_substring() {
        let page = query(
            &params(None, Some("PHONE"), None, None),
            &seed_products(),
            SearchScope::Name,
        );
        assert_eq!(ids(&page.results), vec!["2"]);
    }

    #[test]
    fn test_name_scope_ignores_description() {
        let page = query(
            &params(None, Some("timer"), None, None),
            &seed_products(),
            SearchScope::Name,
        );
        assert_eq!(page.total, 0);

        let page = query(
            &params(None, Some("timer"), None, None),
            &seed_products(),
            SearchScope::NameAndDescription,
        );
        assert_eq!(ids(&page.results), vec!["3"]);
    }

    #[test]
    fn test_filters_combine() {
        let page = query(
            &params(Some("electronics"), Some("lap"), None, None),
            &seed_products(),
            SearchScope::Name,
        );
        assert_eq!(page.total, 1);
        assert_eq!(ids(&page.results), vec!["1"]);
    }

    #[test]
    fn test_second_page_of_one() {
        let page = query(
            &params(None, None, Some("2"), Some("1")),
            &seed_products(),
            SearchScope::Name,
        );
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 3);
        assert_eq!(ids(&page.results), vec!["2"]);
    }

    #[test]
    fn test_page_past_the_end() {
        let page = query(
            &params(None, None, Some("10"), Some("5")),
            &seed_products(),
            SearchScope::Name,
        );
        assert_eq!(page.page, 10);
        assert_eq!(page.total, 3);
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_non_positive_page_or_limit_is_empty() {
        for (p, l) in [("0", "5"), ("-1", "5"), ("1", "0"), ("1", "-3")] {
            let page = query(
                &params(None, None, Some(p), Some(l)),
                &seed_products(),
                SearchScope::Name,
            );
            assert_eq!(page.total, 3);
            assert!(page.results.is_empty(), "page={p} limit={l}");
        }
    }

    #[test]
    fn test_unparseable_numbers_use_defaults() {
        let params = params(None, None, Some("abc"), Some(""));
        assert_eq!(params.page(), DEFAULT_PAGE);
        assert_eq!(params.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_numbers_are_read_by_leading_digits() {
        let params = params(None, None, Some("2abc"), Some("3.7"));
        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), 3);

        assert_eq!(leading_integer(" 4 "), Some(4));
        assert_eq!(leading_integer("+7"), Some(7));
        assert_eq!(leading_integer("-2x"), Some(-2));
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(".5"), None);
        assert_eq!(leading_integer("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let page = query(
            &params(Some(""), Some(""), None, None),
            &seed_products(),
            SearchScope::Name,
        );
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_query_is_repeatable() {
        let products = seed_products();
        let params = params(Some("electronics"), None, Some("1"), Some("1"));
        assert_eq!(
            query(&params, &products, SearchScope::Name),
            query(&params, &products, SearchScope::Name)
        );
    }

    #[test]
    fn test_search_endpoint_semantics() {
        let products = seed_products();
        assert_eq!(search(None, &products, SearchScope::Name).len(), 3);
        assert_eq!(search(Some(""), &products, SearchScope::Name).len(), 3);
        assert_eq!(ids(&search(Some("coffee"), &products, SearchScope::Name)), vec!["3"]);
        assert!(search(Some("16gb"), &products, SearchScope::Name).is_empty());
        assert_eq!(
            ids(&search(Some("16gb"), &products, SearchScope::NameAndDescription)),
            vec!["1"]
        );
    }

    #[test]
    fn test_search_scope_parses_from_snake_case() {
        assert_eq!(
            "name_and_description".parse::<SearchScope>().unwrap(),
            SearchScope::NameAndDescription
        );
    }
}
