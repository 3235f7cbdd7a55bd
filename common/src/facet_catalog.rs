//! Facets offered for a collection page, as returned by the storefront API.

use serde::{Deserialize, Serialize};

use crate::facet_filters::{ActiveFilters, facet_key_from_id, normalize_filter_input};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FacetCatalog {
    pub facets: Vec<FacetDefinition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetKind {
    List,
    PriceRange,
    Boolean,
}

impl FacetKind {
    /// Platform `FilterType` name; unknown kinds are listed as checkboxes.
    pub fn from_platform(filter_type: &str) -> Self {
        match filter_type {
            "PRICE_RANGE" => Self::PriceRange,
            "BOOLEAN" => Self::Boolean,
            _ => Self::List,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetDefinition {
    pub id: String,
    pub label: String,
    pub kind: FacetKind,
    pub values: Vec<FacetValue>,
}

impl FacetDefinition {
    pub fn facet_key(&self) -> &str {
        facet_key_from_id(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub id: String,
    pub label: String,
    pub count: u64,
    /// Opaque platform input, usually a JSON object such as `{"productVendor":"nike"}`.
    pub input: String,
}

/// One active filter value, labelled for a chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub facet_key: String,
    pub raw_value: String,
    pub display_label: String,
}

impl FacetCatalog {
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Label of the catalog value whose input normalizes to `raw_value`.
    pub fn label_for(&self, facet_key: &str, raw_value: &str) -> Option<&str> {
        self.facets
            .iter()
            .filter(|facet| facet.facet_key() == facet_key)
            .flat_map(|facet| facet.values.iter())
            .find(|value| normalize_filter_input(&value.input) == raw_value)
            .map(|value| value.label.as_str())
    }
}

/// Chips for every active value, in facet-key then insertion order. Values the catalog does not
/// know about are still listed, labelled with their raw value, so they stay removable.
pub fn selection_chips(filters: &ActiveFilters, catalog: &FacetCatalog) -> Vec<FacetSelection> {
    let mut chips = Vec::with_capacity(filters.active_count());
    for (facet_key, values) in filters.iter() {
        for value in values {
            let display_label = catalog
                .label_for(facet_key, value)
                .map(|label| label.to_string())
                .unwrap_or_else(|| value.clone());
            chips.push(FacetSelection {
                facet_key: facet_key.to_string(),
                raw_value: value.clone(),
                display_label,
            });
        }
    }
    chips
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet_filters::decode_from_query_string;
    use pretty_assertions::assert_eq;

    fn vendor_catalog() -> FacetCatalog {
        FacetCatalog {
            facets: vec![FacetDefinition {
                id: "filter.p.vendor".to_string(),
                label: "Vendor".to_string(),
                kind: FacetKind::List,
                values: vec![
                    FacetValue {
                        id: "filter.p.vendor.nike".to_string(),
                        label: "Nike".to_string(),
                        count: 8,
                        input: "{\"productVendor\":\"nike\"}".to_string(),
                    },
                    FacetValue {
                        id: "filter.p.vendor.new-balance".to_string(),
                        label: "New Balance".to_string(),
                        count: 7,
                        input: "{\"productVendor\":\"new-balance\"}".to_string(),
                    },
                ],
            }],
        }
    }

    #[test]
    fn chips_use_catalog_labels_with_raw_fallback() {
        let filters = decode_from_query_string("filter.p.vendor=new-balance&filter.p.vendor=gone&filter.v.availability=true");
        let chips = selection_chips(&filters, &vendor_catalog());
        let labels = chips.iter().map(|chip| chip.display_label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["true", "New Balance", "gone"]);
        assert_eq!(chips[1].facet_key, "vendor");
        assert_eq!(chips[1].raw_value, "new-balance");
    }

    #[test]
    fn facet_kind_defaults_to_list() {
        assert_eq!(FacetKind::from_platform("PRICE_RANGE"), FacetKind::PriceRange);
        assert_eq!(FacetKind::from_platform("LIST"), FacetKind::List);
        assert_eq!(FacetKind::from_platform("SOMETHING_NEW"), FacetKind::List);
    }
}
