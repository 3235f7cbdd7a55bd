//! Small helpers over `application/x-www-form-urlencoded` query strings.
//!
//! All helpers accept the query with or without its leading `?` and never fail:
//! undecodable bytes are replaced, and pairs without `=` are read as empty values.

use url::form_urlencoded;

pub fn trim_query(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

/// Decoded `(name, value)` pairs in their original order.
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(trim_query(query).as_bytes())
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

pub fn serialize_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// First value of `name`, like `URLSearchParams.get`.
pub fn get_param(query: &str, name: &str) -> Option<String> {
    query_pairs(query)
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, value)| value)
}

pub fn remove_param(query: &str, name: &str) -> String {
    let pairs = query_pairs(query);
    serialize_pairs(
        pairs
            .iter()
            .filter(|(n, _)| n != name)
            .map(|(n, v)| (n.as_str(), v.as_str())),
    )
}

/// Replaces the first occurrence of `name` in place and drops the rest; appends when absent.
pub fn set_param(query: &str, name: &str, value: &str) -> String {
    let pairs = query_pairs(query);
    let mut written = false;
    let mut out = Vec::with_capacity(pairs.len() + 1);
    for (n, v) in pairs.iter() {
        if n == name {
            if !written {
                out.push((name, value));
                written = true;
            }
            continue;
        }
        out.push((n.as_str(), v.as_str()));
    }
    if !written {
        out.push((name, value));
    }
    serialize_pairs(out)
}
