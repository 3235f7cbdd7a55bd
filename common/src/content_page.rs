//! Shop pages and blog articles reached from search results.

use serde::{Deserialize, Serialize};

use crate::search_result::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Page,
    Article { blog_handle: String, blog_title: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPage {
    pub kind: ContentKind,
    pub handle: String,
    pub title: String,
    /// Rendered as-is; the platform sanitises merchant HTML.
    pub body_html: String,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub image: Option<ImageRef>,
}

impl ContentPage {
    /// Breadcrumb shown above article titles.
    pub fn blog_title(&self) -> Option<&str> {
        match &self.kind {
            ContentKind::Page => None,
            ContentKind::Article { blog_title, .. } => Some(blog_title),
        }
    }

    /// `2024-05-01T10:00:00Z` becomes `2024-05-01`; anything unexpected is shown unchanged.
    pub fn published_date(&self) -> Option<&str> {
        let published_at = self.published_at.as_deref()?;
        Some(published_at.split_once('T').map(|(date, _)| date).unwrap_or(published_at))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn article(published_at: Option<&str>) -> ContentPage {
        ContentPage {
            kind: ContentKind::Article { blog_handle: "journal".to_string(), blog_title: "Journal".to_string() },
            handle: "lace".to_string(),
            title: "Lacing".to_string(),
            body_html: String::new(),
            author: None,
            published_at: published_at.map(str::to_string),
            image: None,
        }
    }

    #[test]
    fn article_metadata_for_the_header() {
        assert_eq!(article(Some("2024-05-01T10:00:00Z")).published_date(), Some("2024-05-01"));
        assert_eq!(article(Some("yesterday")).published_date(), Some("yesterday"));
        assert_eq!(article(None).published_date(), None);
        assert_eq!(article(None).blog_title(), Some("Journal"));
    }
}
