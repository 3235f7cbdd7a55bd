//! Search-as-you-type session.
//!
//! The session owns the authoritative term. Requests may complete in any order, but a response
//! only lands when its term is still the current one, so the latest request wins regardless of
//! which response arrives last.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::{
    search_const::{PREDICTIVE_SEARCH_LIMIT, SEARCH_TERM_PARAM},
    search_result::{ImageRef, Money},
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PredictiveSearchCategory {
    Queries,
    Products,
    Collections,
    Articles,
    Pages,
}

impl PredictiveSearchCategory {
    /// Categories shown to the user, in display order. Pages are fetched but not shown.
    pub const RENDER_ORDER: [PredictiveSearchCategory; 4] = [
        PredictiveSearchCategory::Queries,
        PredictiveSearchCategory::Products,
        PredictiveSearchCategory::Collections,
        PredictiveSearchCategory::Articles,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Queries => "Suggestions",
            Self::Products => "Products",
            Self::Collections => "Collections",
            Self::Articles => "Articles",
            Self::Pages => "Pages",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveSearchItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub thumbnail: Option<ImageRef>,
    pub price: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PredictiveSearchResult {
    pub queries: Vec<PredictiveSearchItem>,
    pub products: Vec<PredictiveSearchItem>,
    pub collections: Vec<PredictiveSearchItem>,
    pub articles: Vec<PredictiveSearchItem>,
    pub pages: Vec<PredictiveSearchItem>,
}

impl PredictiveSearchResult {
    pub fn items(&self, category: PredictiveSearchCategory) -> &[PredictiveSearchItem] {
        match category {
            PredictiveSearchCategory::Queries => &self.queries,
            PredictiveSearchCategory::Products => &self.products,
            PredictiveSearchCategory::Collections => &self.collections,
            PredictiveSearchCategory::Articles => &self.articles,
            PredictiveSearchCategory::Pages => &self.pages,
        }
    }

    /// Sum over every category, including the ones that are not rendered.
    pub fn total_count(&self) -> usize {
        self.queries.len() + self.products.len() + self.collections.len() + self.articles.len() + self.pages.len()
    }

    /// Non-empty rendered categories in [`PredictiveSearchCategory::RENDER_ORDER`].
    pub fn render_groups(&self) -> Vec<(PredictiveSearchCategory, &[PredictiveSearchItem])> {
        PredictiveSearchCategory::RENDER_ORDER
            .into_iter()
            .map(|category| (category, self.items(category)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    Idle,
    Loading,
    Ready,
    Empty,
}

/// What the renderer sees. Each state carries exactly the data it can show, so combinations
/// like "loading without a term" cannot be expressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum SearchSnapshot {
    #[default]
    Idle,
    Loading {
        term: String,
    },
    Ready {
        term: String,
        results: PredictiveSearchResult,
    },
    /// No results, either because the platform found nothing or because the request failed.
    Empty {
        term: String,
        failure: Option<String>,
    },
}

impl SearchSnapshot {
    pub fn term(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Loading { term } | Self::Ready { term, .. } | Self::Empty { term, .. } => term,
        }
    }

    pub fn status(&self) -> SearchStatus {
        match self {
            Self::Idle => SearchStatus::Idle,
            Self::Loading { .. } => SearchStatus::Loading,
            Self::Ready { .. } => SearchStatus::Ready,
            Self::Empty { .. } => SearchStatus::Empty,
        }
    }

    pub fn total_count(&self) -> usize {
        match self {
            Self::Ready { results, .. } => results.total_count(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictiveSearchRequest {
    pub term: String,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictiveSearchSession {
    snapshot: SearchSnapshot,
}

impl PredictiveSearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &SearchSnapshot {
        &self.snapshot
    }

    pub fn term(&self) -> &str {
        self.snapshot.term()
    }

    pub fn is_current_term(&self, term: &str) -> bool {
        !term.is_empty() && self.snapshot.term() == term
    }

    /// Makes `term` authoritative. Returns the request to issue, or `None` for an empty term,
    /// in which case the session is idle and any response still in flight will be ignored.
    pub fn submit_term(&mut self, term: &str) -> Option<PredictiveSearchRequest> {
        let term = term.trim();
        if term.is_empty() {
            self.snapshot = SearchSnapshot::Idle;
            return None;
        }
        self.snapshot = SearchSnapshot::Loading { term: term.to_string() };
        Some(PredictiveSearchRequest {
            term: term.to_string(),
            limit: PREDICTIVE_SEARCH_LIMIT,
        })
    }

    /// Applies a response; returns `false` when it belongs to a superseded term.
    pub fn on_result(&mut self, term: &str, results: PredictiveSearchResult) -> bool {
        if !self.is_current_term(term) {
            return false;
        }
        self.snapshot = if results.total_count() == 0 {
            SearchSnapshot::Empty { term: term.to_string(), failure: None }
        } else {
            SearchSnapshot::Ready { term: term.to_string(), results }
        };
        true
    }

    pub fn on_failure(&mut self, term: &str, message: String) -> bool {
        if !self.is_current_term(term) {
            return false;
        }
        self.snapshot = SearchSnapshot::Empty {
            term: term.to_string(),
            failure: Some(message),
        };
        true
    }

    /// Back to idle. Clearing the bound input is up to the caller.
    pub fn close_session(&mut self) {
        self.snapshot = SearchSnapshot::Idle;
    }
}

/// Result link carrying the search term and the platform's tracking parameters.
pub fn url_with_tracking_params(base_url: &str, tracking_params: Option<&str>, term: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new())
        .append_pair(SEARCH_TERM_PARAM, term)
        .finish();
    if let Some(tracking_params) = tracking_params.filter(|t| !t.is_empty()) {
        query.push('&');
        query.push_str(tracking_params.trim_start_matches(['?', '&']));
    }
    format!("{}?{}", base_url, query)
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: &str) -> PredictiveSearchItem {
        PredictiveSearchItem {
            id: id.to_string(),
            title: format!("title {}", id),
            url: format!("/x/{}", id),
            thumbnail: None,
            price: None,
        }
    }

    fn products(ids: &[&str]) -> PredictiveSearchResult {
        PredictiveSearchResult {
            products: ids.iter().map(|id| item(id)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_idle() {
        let session = PredictiveSearchSession::new();
        assert_eq!(session.snapshot(), &SearchSnapshot::Idle);
        assert_eq!(session.snapshot().status(), SearchStatus::Idle);
    }

    #[test]
    fn submit_then_result_is_ready() {
        let mut session = PredictiveSearchSession::new();
        let request = session.submit_term(" shoe ").unwrap();
        assert_eq!(request, PredictiveSearchRequest { term: "shoe".to_string(), limit: PREDICTIVE_SEARCH_LIMIT });
        assert_eq!(session.snapshot(), &SearchSnapshot::Loading { term: "shoe".to_string() });
        assert!(session.on_result("shoe", products(&["p1"])));
        assert_eq!(session.snapshot().status(), SearchStatus::Ready);
        assert_eq!(session.snapshot().total_count(), 1);
    }

    #[test]
    fn zero_results_are_empty() {
        let mut session = PredictiveSearchSession::new();
        session.submit_term("zzz");
        assert!(session.on_result("zzz", PredictiveSearchResult::default()));
        assert_eq!(session.snapshot(), &SearchSnapshot::Empty { term: "zzz".to_string(), failure: None });
    }

    #[test]
    fn last_term_wins_over_late_response() {
        let mut session = PredictiveSearchSession::new();
        session.submit_term("a");
        session.submit_term("ab");
        assert!(session.on_result("ab", products(&["ab-1", "ab-2"])));
        assert!(!session.on_result("a", products(&["a-1"])));
        match session.snapshot() {
            SearchSnapshot::Ready { term, results } => {
                assert_eq!(term, "ab");
                assert_eq!(results, &products(&["ab-1", "ab-2"]));
            }
            other => panic!("unexpected snapshot {:?}", other),
        }
    }

    #[test]
    fn late_empty_response_for_old_term_does_not_hide_loading() {
        let mut session = PredictiveSearchSession::new();
        session.submit_term("a");
        session.submit_term("ab");
        assert!(!session.on_result("a", PredictiveSearchResult::default()));
        assert_eq!(session.snapshot(), &SearchSnapshot::Loading { term: "ab".to_string() });
    }

    #[test]
    fn empty_term_goes_idle_and_ignores_in_flight_response() {
        let mut session = PredictiveSearchSession::new();
        session.submit_term("jacket");
        assert_eq!(session.submit_term("   "), None);
        assert_eq!(session.snapshot(), &SearchSnapshot::Idle);
        assert!(!session.on_result("jacket", products(&["p1"])));
        assert!(!session.on_failure("jacket", "timeout".to_string()));
        assert_eq!(session.snapshot(), &SearchSnapshot::Idle);
    }

    #[test]
    fn failure_for_current_term_is_empty_with_reason() {
        let mut session = PredictiveSearchSession::new();
        session.submit_term("hat");
        assert!(session.on_failure("hat", "502 Bad Gateway".to_string()));
        assert_eq!(
            session.snapshot(),
            &SearchSnapshot::Empty { term: "hat".to_string(), failure: Some("502 Bad Gateway".to_string()) }
        );
    }

    #[test]
    fn close_session_resets_to_idle() {
        let mut session = PredictiveSearchSession::new();
        session.submit_term("hat");
        session.on_result("hat", products(&["p1"]));
        session.close_session();
        assert_eq!(session.snapshot(), &SearchSnapshot::Idle);
        assert_eq!(session.term(), "");
    }

    #[test]
    fn render_order_is_fixed_and_skips_pages() {
        let results = PredictiveSearchResult {
            articles: vec![item("a1")],
            pages: vec![item("pg1")],
            collections: vec![item("c1")],
            products: vec![item("p1"), item("p2")],
            queries: vec![],
        };
        let order = results.render_groups().into_iter().map(|(category, _)| category).collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                PredictiveSearchCategory::Products,
                PredictiveSearchCategory::Collections,
                PredictiveSearchCategory::Articles,
            ]
        );
        assert_eq!(results.total_count(), 5);
        let products = results.render_groups()[0].1.iter().map(|i| i.id.as_str()).collect::<Vec<_>>();
        assert_eq!(products, vec!["p1", "p2"]);
    }

    #[test]
    fn suggestions_render_first() {
        let results = PredictiveSearchResult {
            articles: vec![item("a1")],
            queries: vec![item("q1")],
            ..Default::default()
        };
        let order = results.render_groups().into_iter().map(|(category, _)| category).collect::<Vec<_>>();
        assert_eq!(order, vec![PredictiveSearchCategory::Queries, PredictiveSearchCategory::Articles]);
    }

    #[test]
    fn tracking_params_follow_the_term() {
        assert_eq!(
            url_with_tracking_params("/products/tee", Some("_pos=1&_sid=abc&_ss=p"), "red tee"),
            "/products/tee?q=red+tee&_pos=1&_sid=abc&_ss=p"
        );
        assert_eq!(url_with_tracking_params("/pages/about", None, "a&b"), "/pages/about?q=a%26b");
    }
}
