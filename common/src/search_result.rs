use serde::{Deserialize, Serialize};

use crate::facet_catalog::FacetCatalog;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self.currency_code.as_str() {
            "USD" | "CAD" | "AUD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            _ => None,
        };
        let amount = match self.amount.parse::<f64>() {
            Ok(amount) => format!("{:.2}", amount),
            Err(_) => self.amount.clone(),
        };
        match symbol {
            Some(symbol) => write!(f, "{}{}", symbol, amount),
            None => write!(f, "{} {}", amount, self.currency_code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub vendor: String,
    pub featured_image: Option<ImageRef>,
    pub min_price: Option<Money>,
}

/// Demo card shown where the store has no real products to offer yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderProduct {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub price_label: String,
    pub is_new: bool,
}

/// A product card. The loader decides which variant it hands out; renderers only match on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogProduct {
    Storefront(ProductSummary),
    Placeholder(PlaceholderProduct),
}

impl CatalogProduct {
    pub fn key(&self) -> &str {
        match self {
            Self::Storefront(product) => &product.id,
            Self::Placeholder(product) => &product.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Storefront(product) => &product.title,
            Self::Placeholder(product) => &product.name,
        }
    }

    pub fn brand(&self) -> &str {
        match self {
            Self::Storefront(product) => &product.vendor,
            Self::Placeholder(product) => &product.brand,
        }
    }

    pub fn price_label(&self) -> Option<String> {
        match self {
            Self::Storefront(product) => product.min_price.as_ref().map(|price| price.to_string()),
            Self::Placeholder(product) => Some(product.price_label.clone()),
        }
    }

    pub fn image(&self) -> Option<&ImageRef> {
        match self {
            Self::Storefront(product) => product.featured_image.as_ref(),
            Self::Placeholder(_) => None,
        }
    }

    /// Product page link; placeholders lead nowhere.
    pub fn url(&self) -> Option<String> {
        match self {
            Self::Storefront(product) => Some(format!("/products/{}", product.handle)),
            Self::Placeholder(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub end_cursor: Option<String>,
    pub start_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage {
    pub handle: String,
    pub title: String,
    pub description: String,
    pub products: Vec<CatalogProduct>,
    pub facets: FacetCatalog,
    pub page_info: PageInfo,
}

/// Article or page hit on the full search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultLink {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegularSearchResult {
    pub term: String,
    pub products: Vec<CatalogProduct>,
    pub articles: Vec<SearchResultLink>,
    pub pages: Vec<SearchResultLink>,
    pub page_info: PageInfo,
    /// Total product matches reported by the platform plus the article and page hits.
    pub total: u64,
}

impl RegularSearchResult {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn money_formats_known_and_unknown_currencies() {
        let usd = Money { amount: "160.0".to_string(), currency_code: "USD".to_string() };
        assert_eq!(usd.to_string(), "$160.00");
        let jpy = Money { amount: "1200".to_string(), currency_code: "JPY".to_string() };
        assert_eq!(jpy.to_string(), "1200.00 JPY");
        let odd = Money { amount: "n/a".to_string(), currency_code: "EUR".to_string() };
        assert_eq!(odd.to_string(), "€n/a");
    }

    #[test]
    fn placeholder_cards_have_no_link_or_image() {
        let card = CatalogProduct::Placeholder(PlaceholderProduct {
            id: "1".to_string(),
            brand: "PUMA".to_string(),
            name: "Speedcat OG".to_string(),
            price_label: "$140".to_string(),
            is_new: true,
        });
        assert_eq!(card.url(), None);
        assert_eq!(card.image(), None);
        assert_eq!(card.price_label(), Some("$140".to_string()));
        assert_eq!(card.brand(), "PUMA");
    }
}
