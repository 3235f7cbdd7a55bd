//! Active collection filters and their query-string encoding.
//!
//! The URL is the only durable copy of the filter state, so every function here is a pure
//! transform over query strings. Untrusted input never fails: parameters that do not look like
//! filters are left alone and values that are not valid JSON are kept as opaque strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    query_string::{query_pairs, serialize_pairs},
    search_const::{ENTITY_FILTER_PREFIX, ENTITY_LEVEL_FACET_KEYS, FILTER_PARAM_PREFIX, SORT_PARAM, VARIANT_FILTER_PREFIX},
    sort_selection::SortSelection,
};


/// Whether a facet filters the product record or one of its variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetNamespace {
    Entity,
    Variant,
}

impl FacetNamespace {
    pub fn for_facet_key(facet_key: &str) -> Self {
        if ENTITY_LEVEL_FACET_KEYS.contains(&facet_key) {
            Self::Entity
        } else {
            Self::Variant
        }
    }

    pub fn param_prefix(&self) -> &'static str {
        match self {
            Self::Entity => ENTITY_FILTER_PREFIX,
            Self::Variant => VARIANT_FILTER_PREFIX,
        }
    }
}

/// Full parameter name for a facet key, e.g. `filter.p.vendor`.
pub fn filter_param_name(facet_key: &str) -> String {
    format!("{}.{}", FacetNamespace::for_facet_key(facet_key).param_prefix(), facet_key)
}

/// Exactly the parameters [`decode_from_query_string`] reads; everything else is left alone on encode.
pub fn is_filter_param(name: &str) -> bool {
    facet_key_from_param(name).is_some()
}

/// Facet key of a `filter.p.<key>` or `filter.v.<key>` parameter; `None` for anything else.
fn facet_key_from_param(name: &str) -> Option<&str> {
    let rest = name.strip_prefix(FILTER_PARAM_PREFIX)?;
    let (namespace, facet_key) = rest.split_once('.')?;
    let known_namespace = [ENTITY_FILTER_PREFIX, VARIANT_FILTER_PREFIX]
        .iter()
        .any(|prefix| prefix.strip_prefix(FILTER_PARAM_PREFIX) == Some(namespace));
    if !known_namespace || facet_key.is_empty() {
        return None;
    }
    Some(facet_key)
}

/// Facet key for a catalog facet id: `filter.p.type` -> `type`, `some.custom.id` -> `id`.
pub fn facet_key_from_id(facet_id: &str) -> &str {
    if let Some(facet_key) = facet_key_from_param(facet_id) {
        return facet_key;
    }
    facet_id.rsplit('.').next().unwrap_or(facet_id)
}

fn sorted_json(value: Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut entries = object.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sorted_json(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted_json).collect()),
        other => other,
    }
}

/// Canonical key-sorted JSON text for values that are JSON objects, the trimmed string otherwise.
pub fn canonical_filter_value(raw_value: &str) -> String {
    match serde_json::from_str::<Value>(raw_value) {
        Ok(value @ Value::Object(_)) => sorted_json(value).to_string(),
        _ => raw_value.trim().to_string(),
    }
}

/// Turns a catalog `input` such as `{"productType":"shoes"}` into the value stored in the URL.
///
/// Single-key inputs keep only their value (`shoes`, `true`); a nested object keeps the canonical
/// JSON of the inner value so two encodings of the same object compare equal. Multi-key objects
/// are kept whole in canonical form. Anything that is not a JSON object is trimmed text.
pub fn normalize_filter_input(input: &str) -> String {
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(input) else {
        return input.trim().to_string();
    };
    if object.len() != 1 {
        return sorted_json(Value::Object(object)).to_string();
    }
    match object.into_iter().next() {
        Some((_, Value::String(s))) => s.trim().to_string(),
        Some((_, value @ (Value::Object(_) | Value::Array(_)))) => sorted_json(value).to_string(),
        Some((_, Value::Null)) | None => input.trim().to_string(),
        Some((_, value)) => value.to_string(),
    }
}


/// Active filter values grouped by facet key. Values keep their insertion order and are unique
/// per key; keys with no values are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActiveFilters {
    facets: BTreeMap<String, Vec<String>>,
}

impl ActiveFilters {
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.facets.values().map(|values| values.len()).sum()
    }

    pub fn values(&self, facet_key: &str) -> &[String] {
        self.facets.get(facet_key).map(|values| values.as_slice()).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.facets.iter().map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn contains(&self, facet_key: &str, value: &str) -> bool {
        self.values(facet_key).iter().any(|v| v == value)
    }

    /// Whether the checkbox for a catalog value (`facet_id`, `input`) should render checked.
    pub fn is_selected(&self, facet_id: &str, input: &str) -> bool {
        self.contains(facet_key_from_id(facet_id), &normalize_filter_input(input))
    }

    /// Adds a value; duplicates and empty values are ignored.
    pub fn insert(&mut self, facet_key: &str, value: String) {
        if facet_key.is_empty() || value.is_empty() {
            return;
        }
        let entry = self.facets.entry(facet_key.to_string()).or_default();
        if !entry.contains(&value) {
            entry.push(value);
        }
    }

    pub fn remove(&mut self, facet_key: &str, value: &str) {
        if let Some(values) = self.facets.get_mut(facet_key) {
            values.retain(|v| v != value);
            if values.is_empty() {
                self.facets.remove(facet_key);
            }
        }
    }
}


/// Reads every `filter.<namespace>.<key>=<value>` parameter into [`ActiveFilters`].
pub fn decode_from_query_string(query: &str) -> ActiveFilters {
    let mut filters = ActiveFilters::default();
    for (name, value) in query_pairs(query) {
        let Some(facet_key) = facet_key_from_param(&name) else {
            continue;
        };
        filters.insert(facet_key, canonical_filter_value(&value));
    }
    filters
}

/// Checkbox toggle: adds or removes the normalized `raw_value` under the facet of `facet_id`.
pub fn apply_selection_change(current: &ActiveFilters, facet_id: &str, raw_value: &str, checked: bool) -> ActiveFilters {
    let facet_key = facet_key_from_id(facet_id);
    let value = normalize_filter_input(raw_value);
    let mut next = current.clone();
    if checked {
        next.insert(facet_key, value);
    } else {
        next.remove(facet_key, &value);
    }
    next
}

/// Removes a value that is already in URL form, as shown on a selection chip.
pub fn remove_selection(current: &ActiveFilters, facet_key: &str, value: &str) -> ActiveFilters {
    let mut next = current.clone();
    next.remove(facet_key, value);
    next
}

/// Replaces all values of a single-valued facet such as a price bound; `None` clears it.
pub fn set_single_value(current: &ActiveFilters, facet_key: &str, value: Option<String>) -> ActiveFilters {
    let mut next = current.clone();
    next.facets.remove(facet_key);
    if let Some(value) = value {
        next.insert(facet_key, value.trim().to_string());
    }
    next
}

/// Rewrites `current_query` so it carries exactly `filters` and `sort`.
///
/// Non-filter parameters keep their relative order, `sort_by` keeps its position when it was
/// already present, and filter parameters are appended one per value.
pub fn encode_to_query_string(current_query: &str, filters: &ActiveFilters, sort: SortSelection) -> String {
    let pairs = query_pairs(current_query);
    let mut out: Vec<(String, String)> = Vec::with_capacity(pairs.len() + filters.active_count() + 1);
    let mut sort_written = false;
    for (name, value) in pairs {
        if is_filter_param(&name) {
            continue;
        }
        if name == SORT_PARAM {
            if !sort_written {
                if let Some(sort_param) = sort.as_param() {
                    out.push((SORT_PARAM.to_string(), sort_param.to_string()));
                }
                sort_written = true;
            }
            continue;
        }
        out.push((name, value));
    }
    for (facet_key, values) in filters.iter() {
        let param_name = filter_param_name(facet_key);
        for value in values {
            out.push((param_name.clone(), value.clone()));
        }
    }
    if !sort_written {
        if let Some(sort_param) = sort.as_param() {
            out.push((SORT_PARAM.to_string(), sort_param.to_string()));
        }
    }
    serialize_pairs(out.iter().map(|(n, v)| (n.as_str(), v.as_str())))
}

/// Drops every filter parameter; everything else, including the sort, is preserved.
pub fn clear_all(current_query: &str) -> (ActiveFilters, String) {
    let pairs = query_pairs(current_query);
    let query = serialize_pairs(
        pairs
            .iter()
            .filter(|(name, _)| !is_filter_param(name))
            .map(|(n, v)| (n.as_str(), v.as_str())),
    );
    (ActiveFilters::default(), query)
}
