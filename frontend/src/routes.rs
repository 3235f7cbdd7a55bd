use dioxus::prelude::*;

use common::{query_string::serialize_pairs, search_const::SEARCH_TERM_PARAM};

use crate::components::navbar::Navbar;
use crate::data_definitions::url_query::UrlQuery;
use crate::pages::collection_page::CollectionPage;
use crate::pages::content_page::{ArticlePage, ShopPage};
use crate::pages::home_page::HomePage;
use crate::pages::product_page::ProductPage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/collections/:handle?:..query")]
    CollectionPage {
        handle: String,
        query: UrlQuery,
    },


    #[route("/products/:handle?:..query")]
    ProductPage {
        handle: String,
        query: UrlQuery,
    },


    #[route("/search?:..query")]
    SearchPage { query: UrlQuery },


    #[route("/pages/:handle")]
    ShopPage { handle: String },


    #[route("/blogs/:blog/:handle")]
    ArticlePage { blog: String, handle: String },

}

impl Route {
    pub fn collection(handle: &str, query: String) -> Self {
        Self::CollectionPage {
            handle: handle.to_string(),
            query: UrlQuery(query),
        }
    }

    pub fn product(handle: &str, query: String) -> Self {
        Self::ProductPage {
            handle: handle.to_string(),
            query: UrlQuery(query),
        }
    }

    pub fn search_page_for_term(term: &str) -> Self {
        Self::SearchPage {
            query: UrlQuery(serialize_pairs([(SEARCH_TERM_PARAM, term)])),
        }
    }
}
