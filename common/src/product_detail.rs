//! Product page data and variant selection through the query string.
//!
//! The selected variant is addressed by its option values (`?Color=Red&Size=M`), the same way
//! collection filters live in the URL.

use serde::{Deserialize, Serialize};

use crate::{
    query_string::{query_pairs, set_param},
    search_const::SEARCH_TERM_PARAM,
    search_result::{CatalogProduct, ImageRef, Money},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: String,
    pub title: String,
    pub available_for_sale: bool,
    pub price: Money,
    pub compare_at_price: Option<Money>,
    pub image: Option<ImageRef>,
    pub selected_options: Vec<SelectedOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptionValue {
    pub name: String,
    /// Whether the first variant carrying this value can be bought.
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    pub values: Vec<ProductOptionValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub vendor: String,
    pub description_html: String,
    pub images: Vec<ImageRef>,
    pub options: Vec<ProductOption>,
    /// The variant matching the URL selection, or the first available one.
    pub selected_variant: Option<ProductVariant>,
    pub related: Vec<CatalogProduct>,
}

impl ProductDetail {
    pub fn is_selected(&self, option_name: &str, value: &str) -> bool {
        self.selected_variant
            .as_ref()
            .map(|variant| variant.selected_options.iter().any(|o| o.name == option_name && o.value == value))
            .unwrap_or(false)
    }

    /// Options with a single value are not worth a picker.
    pub fn selectable_options(&self) -> impl Iterator<Item = &ProductOption> {
        self.options.iter().filter(|option| option.values.len() > 1)
    }
}

/// Search and tracking parameters that arrive on product links but are not option names.
fn is_option_param(name: &str) -> bool {
    name != SEARCH_TERM_PARAM && !name.starts_with('_') && !name.is_empty()
}

/// Option selections read from a product URL, in URL order.
pub fn selected_options_from_query(query: &str) -> Vec<SelectedOption> {
    query_pairs(query)
        .into_iter()
        .filter(|(name, value)| is_option_param(name) && !value.is_empty())
        .map(|(name, value)| SelectedOption { name, value })
        .collect()
}

/// Query selecting `value` for `option_name` while keeping the rest of the current variant.
pub fn option_selection_query(current_query: &str, current: &[SelectedOption], option_name: &str, value: &str) -> String {
    let mut query = current_query.to_string();
    for option in current {
        if option.name != option_name {
            query = set_param(&query, &option.name, &option.value);
        }
    }
    set_param(&query, option_name, value)
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn option(name: &str, value: &str) -> SelectedOption {
        SelectedOption { name: name.to_string(), value: value.to_string() }
    }

    #[test]
    fn selections_skip_search_and_tracking_params() {
        let selected = selected_options_from_query("?q=tee&_pos=1&_sid=abc&Color=Red&Size=&Size=M");
        assert_eq!(selected, vec![option("Color", "Red"), option("Size", "M")]);
    }

    #[test]
    fn picking_a_value_keeps_the_other_options() {
        let current = vec![option("Color", "Red"), option("Size", "M")];
        assert_eq!(option_selection_query("", &current, "Size", "L"), "Color=Red&Size=L");
        assert_eq!(option_selection_query("Size=M&Color=Red", &current, "Color", "Blue"), "Size=M&Color=Blue");
    }

    #[test]
    fn selected_values_come_from_the_variant() {
        let detail = ProductDetail {
            id: "p1".to_string(),
            handle: "tee".to_string(),
            title: "Tee".to_string(),
            vendor: String::new(),
            description_html: String::new(),
            images: Vec::new(),
            options: vec![
                ProductOption { name: "Title".to_string(), values: vec![ProductOptionValue { name: "Default".to_string(), available: true }] },
                ProductOption {
                    name: "Size".to_string(),
                    values: vec![
                        ProductOptionValue { name: "M".to_string(), available: true },
                        ProductOptionValue { name: "L".to_string(), available: false },
                    ],
                },
            ],
            selected_variant: Some(ProductVariant {
                id: "v1".to_string(),
                title: "M".to_string(),
                available_for_sale: true,
                price: Money { amount: "10.0".to_string(), currency_code: "USD".to_string() },
                compare_at_price: None,
                image: None,
                selected_options: vec![option("Size", "M")],
            }),
            related: Vec::new(),
        };
        assert!(detail.is_selected("Size", "M"));
        assert!(!detail.is_selected("Size", "L"));
        assert_eq!(detail.selectable_options().map(|o| o.name.as_str()).collect::<Vec<_>>(), vec!["Size"]);
    }
}
