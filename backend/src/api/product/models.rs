//! Request models for the product listing endpoints.

use crate::api::common::{PaginationFilter, deserialize_comma_list};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sort orders the storefront can request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    #[serde(rename = "price-lowtohigh")]
    PriceLowToHigh,
    #[serde(rename = "price-hightolow")]
    PriceHighToLow,
    #[serde(rename = "title-atoz")]
    TitleAToZ,
    #[serde(rename = "title-ztoa")]
    TitleZToA,
}

/// Query parameters of the filtered product listing.
///
/// `category` and `brand` accept comma-separated lists.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(default, deserialize_with = "deserialize_comma_list")]
    pub category: Option<Vec<String>>,

    #[serde(default, deserialize_with = "deserialize_comma_list")]
    pub brand: Option<Vec<String>>,

    #[serde(default)]
    pub sort_by: Option<SortBy>,

    /// Page number (1-indexed)
    #[validate(range(min = 1))]
    pub page: Option<u32>,

    /// Number of items per page
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

impl ProductFilter {
    /// The pagination part of the filter, with defaults applied.
    pub fn pagination(&self) -> PaginationFilter {
        PaginationFilter {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_parses_the_wire_names() {
        let sort: SortBy = serde_json::from_str(r#""price-hightolow""#).unwrap();
        assert_eq!(sort, SortBy::PriceHighToLow);

        let sort: SortBy = serde_json::from_str(r#""title-atoz""#).unwrap();
        assert_eq!(sort, SortBy::TitleAToZ);

        assert!(serde_json::from_str::<SortBy>(r#""price-descending""#).is_err());
    }
}
