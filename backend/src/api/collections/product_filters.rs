//! Translation of URL filter state into storefront `ProductFilter` inputs.

use common::{
    facet_filters::ActiveFilters,
    search_const::{PRICE_MAX_FACET_KEY, PRICE_MIN_FACET_KEY},
};
use serde_json::{Map, Value, json};


fn parse_price(values: &[String]) -> Option<f64> {
    values.first().and_then(|v| v.trim().parse::<f64>().ok()).filter(|v| v.is_finite())
}

fn json_object(value: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(value) {
        Ok(object @ Value::Object(_)) => Some(object),
        _ => None,
    }
}

/// One `ProductFilter` per active value. Values that cannot be expressed as a filter are skipped,
/// so a hand-edited URL narrows the result set at worst by the parts it got right.
pub fn product_filters(filters: &ActiveFilters) -> Vec<Value> {
    let mut out = Vec::new();
    let mut price = Map::new();
    for (facet_key, values) in filters.iter() {
        match facet_key {
            "type" | "product_type" => out.extend(values.iter().map(|v| json!({ "productType": v }))),
            "vendor" => out.extend(values.iter().map(|v| json!({ "productVendor": v }))),
            "tag" => out.extend(values.iter().map(|v| json!({ "tag": v }))),
            "availability" => {
                for value in values {
                    match value.as_str() {
                        "true" | "1" => out.push(json!({ "available": true })),
                        "false" | "0" => out.push(json!({ "available": false })),
                        _ => {}
                    }
                }
            }
            PRICE_MIN_FACET_KEY => {
                if let Some(min) = parse_price(values) {
                    price.insert("min".to_string(), json!(min));
                }
            }
            PRICE_MAX_FACET_KEY => {
                if let Some(max) = parse_price(values) {
                    price.insert("max".to_string(), json!(max));
                }
            }
            _ => {
                let option_name = facet_key.strip_prefix("option.");
                let metafield = facet_key.starts_with("m.");
                for value in values {
                    match (json_object(value), option_name) {
                        (Some(object), Some(_)) => out.push(json!({ "variantOption": object })),
                        (Some(object), None) if metafield => out.push(json!({ "productMetafield": object })),
                        (Some(object), None) if facet_key == "category" => out.push(json!({ "category": object })),
                        (Some(object), None) => out.push(object),
                        (None, Some(name)) => out.push(json!({ "variantOption": { "name": name, "value": value } })),
                        (None, None) => out.push(json!({ "variantOption": { "name": facet_key, "value": value } })),
                    }
                }
            }
        }
    }
    if !price.is_empty() {
        out.push(json!({ "price": Value::Object(price) }));
    }
    out
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::facet_filters::decode_from_query_string;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_facets_map_to_platform_filters() {
        let filters = decode_from_query_string(
            "filter.p.type=shoes&filter.p.vendor=nike&filter.v.availability=true&filter.v.price.gte=10&filter.v.price.lte=99.5",
        );
        assert_eq!(
            product_filters(&filters),
            vec![
                json!({ "available": true }),
                json!({ "productType": "shoes" }),
                json!({ "productVendor": "nike" }),
                json!({ "price": { "min": 10.0, "max": 99.5 } }),
            ]
        );
    }

    #[test]
    fn options_and_compound_values() {
        let filters = decode_from_query_string(
            "filter.v.option.color=Red&filter.v.category=%7B%22id%22%3A%22gid%3A%2F%2Fshopify%2FTaxonomyCategory%2Faa%22%7D&filter.v.size=M",
        );
        assert_eq!(
            product_filters(&filters),
            vec![
                json!({ "category": { "id": "gid://shopify/TaxonomyCategory/aa" } }),
                json!({ "variantOption": { "name": "color", "value": "Red" } }),
                json!({ "variantOption": { "name": "size", "value": "M" } }),
            ]
        );
    }

    #[test]
    fn unusable_values_are_dropped() {
        let filters = decode_from_query_string("filter.v.availability=maybe&filter.v.price.gte=cheap");
        assert!(product_filters(&filters).is_empty());
    }
}
