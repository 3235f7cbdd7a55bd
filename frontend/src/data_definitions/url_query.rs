//! Raw query string carried by a route.

use std::fmt::Display;

use common::query_string::{get_param, trim_query};
use common::search_const::SEARCH_TERM_PARAM;

/// The router hands us everything after `?`; filter and sort state is decoded from it on demand,
/// so unknown parameters survive every navigation untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UrlQuery(pub String);

impl From<&str> for UrlQuery {
    fn from(value: &str) -> Self {
        UrlQuery(trim_query(value).to_string())
    }
}

impl Display for UrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl UrlQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn search_term(&self) -> String {
        get_param(&self.0, SEARCH_TERM_PARAM).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_question_mark_is_dropped() {
        let query = UrlQuery::from("?q=red+tee&sort_by=price-ascending");
        assert_eq!(query.as_str(), "q=red+tee&sort_by=price-ascending");
        assert_eq!(query.to_string(), "q=red+tee&sort_by=price-ascending");
        assert_eq!(query.search_term(), "red tee");
    }
}
