//! Cursor paging carried in the query string as `cursor` plus `direction`.

use serde::{Deserialize, Serialize};

use crate::{
    query_string::{get_param, remove_param, set_param},
    search_const::{CURSOR_PARAM, DIRECTION_NEXT, DIRECTION_PARAM, DIRECTION_PREVIOUS},
    search_result::PageInfo,
};

/// Which page of a connection the URL asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PageCursor {
    #[default]
    First,
    After(String),
    Before(String),
}

/// GraphQL connection arguments; exactly one of `first` / `last` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionArgs {
    pub first: Option<u64>,
    pub last: Option<u64>,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

impl PageCursor {
    pub fn from_query_string(query: &str) -> Self {
        let Some(cursor) = get_param(query, CURSOR_PARAM).filter(|c| !c.is_empty()) else {
            return Self::First;
        };
        match get_param(query, DIRECTION_PARAM).as_deref() {
            Some(DIRECTION_PREVIOUS) => Self::Before(cursor),
            _ => Self::After(cursor),
        }
    }

    pub fn connection_args(&self, page_size: u64) -> ConnectionArgs {
        match self {
            Self::First => ConnectionArgs { first: Some(page_size), last: None, start_cursor: None, end_cursor: None },
            Self::After(cursor) => ConnectionArgs {
                first: Some(page_size),
                last: None,
                start_cursor: None,
                end_cursor: Some(cursor.clone()),
            },
            Self::Before(cursor) => ConnectionArgs {
                first: None,
                last: Some(page_size),
                start_cursor: Some(cursor.clone()),
                end_cursor: None,
            },
        }
    }
}

fn with_cursor(query: &str, cursor: &str, direction: &str) -> String {
    set_param(&set_param(query, CURSOR_PARAM, cursor), DIRECTION_PARAM, direction)
}

/// Query for the page after the current one, keeping every other parameter.
pub fn next_page_query(query: &str, page_info: &PageInfo) -> Option<String> {
    if !page_info.has_next_page {
        return None;
    }
    let cursor = page_info.end_cursor.as_deref()?;
    Some(with_cursor(query, cursor, DIRECTION_NEXT))
}

pub fn previous_page_query(query: &str, page_info: &PageInfo) -> Option<String> {
    if !page_info.has_previous_page {
        return None;
    }
    let cursor = page_info.start_cursor.as_deref()?;
    Some(with_cursor(query, cursor, DIRECTION_PREVIOUS))
}

/// Drops the paging parameters, e.g. after a filter or sort change.
pub fn reset_paging(query: &str) -> String {
    remove_param(&remove_param(query, CURSOR_PARAM), DIRECTION_PARAM)
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page_info(previous: bool, next: bool) -> PageInfo {
        PageInfo {
            has_next_page: next,
            has_previous_page: previous,
            end_cursor: Some("end".to_string()),
            start_cursor: Some("start".to_string()),
        }
    }

    #[test]
    fn cursor_and_direction_pick_the_page() {
        assert_eq!(PageCursor::from_query_string("q=tee"), PageCursor::First);
        assert_eq!(PageCursor::from_query_string("cursor="), PageCursor::First);
        assert_eq!(PageCursor::from_query_string("cursor=abc"), PageCursor::After("abc".to_string()));
        assert_eq!(PageCursor::from_query_string("cursor=abc&direction=next"), PageCursor::After("abc".to_string()));
        assert_eq!(PageCursor::from_query_string("direction=previous&cursor=abc"), PageCursor::Before("abc".to_string()));
    }

    #[test]
    fn previous_pages_count_back_from_the_start_cursor() {
        let args = PageCursor::Before("c0".to_string()).connection_args(20);
        assert_eq!(args.first, None);
        assert_eq!(args.last, Some(20));
        assert_eq!(args.start_cursor.as_deref(), Some("c0"));
        assert_eq!(args.end_cursor, None);
        assert_eq!(PageCursor::First.connection_args(20).first, Some(20));
    }

    #[test]
    fn page_links_keep_other_params() {
        let query = "filter.p.vendor=nike&cursor=old&direction=previous&sort_by=best-selling";
        assert_eq!(
            next_page_query(query, &page_info(true, true)).as_deref(),
            Some("filter.p.vendor=nike&cursor=end&direction=next&sort_by=best-selling")
        );
        assert_eq!(
            previous_page_query(query, &page_info(true, true)).as_deref(),
            Some("filter.p.vendor=nike&cursor=start&direction=previous&sort_by=best-selling")
        );
        assert_eq!(next_page_query(query, &page_info(true, false)), None);
        assert_eq!(previous_page_query(query, &page_info(false, true)), None);
        assert_eq!(reset_paging(query), "filter.p.vendor=nike&sort_by=best-selling");
    }
}
