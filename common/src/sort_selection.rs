//! Collection sort order and its `sort_by` parameter.

use serde::{Deserialize, Serialize};

use crate::{query_string::get_param, search_const::SORT_PARAM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortSelection {
    #[default]
    CollectionDefault,
    TitleAscending,
    TitleDescending,
    PriceAscending,
    PriceDescending,
    CreatedAscending,
    CreatedDescending,
    BestSelling,
}

impl SortSelection {
    pub const ALL: [SortSelection; 8] = [
        SortSelection::CollectionDefault,
        SortSelection::TitleAscending,
        SortSelection::TitleDescending,
        SortSelection::PriceAscending,
        SortSelection::PriceDescending,
        SortSelection::CreatedAscending,
        SortSelection::CreatedDescending,
        SortSelection::BestSelling,
    ];

    /// Value used by the sort `<select>`; the default sort has a value too, but it is never written to the URL.
    pub fn param_value(&self) -> &'static str {
        match self {
            Self::CollectionDefault => "collection-default",
            Self::TitleAscending => "title-ascending",
            Self::TitleDescending => "title-descending",
            Self::PriceAscending => "price-ascending",
            Self::PriceDescending => "price-descending",
            Self::CreatedAscending => "created-ascending",
            Self::CreatedDescending => "created-descending",
            Self::BestSelling => "best-selling",
        }
    }

    /// `sort_by` value, `None` for the platform default.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            Self::CollectionDefault => None,
            other => Some(other.param_value()),
        }
    }

    /// Unrecognised values fall back to the default sort.
    pub fn from_param(param: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.param_value() == param)
            .unwrap_or_default()
    }

    pub fn from_query_string(query: &str) -> Self {
        get_param(query, SORT_PARAM)
            .map(|param| Self::from_param(&param))
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CollectionDefault => "Featured",
            Self::TitleAscending => "Alphabetically, A-Z",
            Self::TitleDescending => "Alphabetically, Z-A",
            Self::PriceAscending => "Price, low to high",
            Self::PriceDescending => "Price, high to low",
            Self::CreatedAscending => "Date, old to new",
            Self::CreatedDescending => "Date, new to old",
            Self::BestSelling => "Best selling",
        }
    }

    /// `ProductCollectionSortKeys` value understood by the storefront API.
    pub fn sort_key(&self) -> &'static str {
        match self {
            Self::CollectionDefault => "COLLECTION_DEFAULT",
            Self::TitleAscending | Self::TitleDescending => "TITLE",
            Self::PriceAscending | Self::PriceDescending => "PRICE",
            Self::CreatedAscending | Self::CreatedDescending => "CREATED",
            Self::BestSelling => "BEST_SELLING",
        }
    }

    pub fn reverse(&self) -> bool {
        matches!(self, Self::TitleDescending | Self::PriceDescending | Self::CreatedDescending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_sort_parses_back_from_its_param() {
        for sort in SortSelection::ALL {
            assert_eq!(SortSelection::from_param(sort.param_value()), sort);
        }
    }

    #[test]
    fn default_sort_is_never_a_param() {
        assert_eq!(SortSelection::CollectionDefault.as_param(), None);
        assert_eq!(SortSelection::BestSelling.as_param(), Some("best-selling"));
    }

    #[test]
    fn unknown_or_missing_sort_falls_back_to_default() {
        assert_eq!(SortSelection::from_query_string("sort_by=cheapest-first"), SortSelection::CollectionDefault);
        assert_eq!(SortSelection::from_query_string("utm_source=mail"), SortSelection::CollectionDefault);
        assert_eq!(SortSelection::from_query_string("?sort_by=price-descending"), SortSelection::PriceDescending);
    }

    #[test]
    fn descending_sorts_reverse_the_platform_key() {
        assert_eq!(SortSelection::PriceDescending.sort_key(), "PRICE");
        assert!(SortSelection::PriceDescending.reverse());
        assert!(!SortSelection::PriceAscending.reverse());
        assert!(!SortSelection::BestSelling.reverse());
    }
}
