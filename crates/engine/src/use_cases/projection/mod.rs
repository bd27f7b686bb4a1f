//! View projection.
//!
//! Display lists are rebuilt from a full read of a collection after every
//! mutation. Nothing is cached; the store is the only source of truth.

use std::cmp::Ordering;
use std::sync::Arc;

use pantry_shared::{ProductRow, StockLine};

use crate::infrastructure::documents::{
    product_from_document, stock_from_document, INVENTORY, PRODUCTS,
};
use crate::infrastructure::ports::{Document, DocumentStore, RepoError};

/// Compare names the way a locale-aware collator does for Latin text.
///
/// Letters compare by their base form first, so `éclair` sits among the
/// `e`s rather than after `z`. Ties break on accents (unaccented first) and
/// then on case (lower case first).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (a.to_lowercase(), b.to_lowercase());
    collation_key(&a_lower)
        .cmp(&collation_key(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| b.cmp(a))
}

/// Lower-case text with Latin diacritics folded to their base letters.
fn collation_key(lower: &str) -> String {
    let mut key = String::with_capacity(lower.len());
    for c in lower.chars() {
        match c {
            'à'..='å' | 'ā' | 'ă' | 'ą' => key.push('a'),
            'æ' => key.push_str("ae"),
            'ç' | 'ć' | 'č' => key.push('c'),
            'ď' | 'đ' => key.push('d'),
            'è'..='ë' | 'ē' | 'ę' | 'ě' => key.push('e'),
            'ì'..='ï' | 'ī' | 'į' | 'ı' => key.push('i'),
            'ł' | 'ľ' => key.push('l'),
            'ñ' | 'ń' | 'ň' => key.push('n'),
            'ò'..='ö' | 'ø' | 'ō' | 'ő' => key.push('o'),
            'œ' => key.push_str("oe"),
            'ř' => key.push('r'),
            'ß' => key.push_str("ss"),
            'ś' | 'š' | 'ş' => key.push('s'),
            'ť' | 'ţ' => key.push('t'),
            'ù'..='ü' | 'ū' | 'ů' | 'ű' => key.push('u'),
            'ý' | 'ÿ' => key.push('y'),
            'ź' | 'ż' | 'ž' => key.push('z'),
            other => key.push(other),
        }
    }
    key
}

/// Stock lines for every document, sorted by name.
pub fn project_stock(docs: &[Document]) -> Result<Vec<StockLine>, RepoError> {
    let mut lines = docs
        .iter()
        .map(|doc| stock_from_document(doc).map(|item| StockLine::from(&item)))
        .collect::<Result<Vec<_>, _>>()?;
    lines.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    Ok(lines)
}

/// Product rows whose name contains `search`, ignoring case, in store order.
/// A missing or blank term keeps every row.
pub fn project_products(
    docs: &[Document],
    search: Option<&str>,
) -> Result<Vec<ProductRow>, RepoError> {
    let needle = search
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    let mut rows = Vec::with_capacity(docs.len());
    for doc in docs {
        let product = product_from_document(doc)?;
        let keep = match needle.as_deref() {
            Some(term) => product.name().as_str().to_lowercase().contains(term),
            None => true,
        };
        if keep {
            rows.push(ProductRow::from(&product));
        }
    }
    Ok(rows)
}

pub struct ListStock {
    store: Arc<dyn DocumentStore>,
}

impl ListStock {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<StockLine>, RepoError> {
        let docs = self.store.list(INVENTORY).await?;
        project_stock(&docs)
    }
}

pub struct ListProducts {
    store: Arc<dyn DocumentStore>,
}

impl ListProducts {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, search: Option<&str>) -> Result<Vec<ProductRow>, RepoError> {
        let docs = self.store.list(PRODUCTS).await?;
        project_products(&docs, search)
    }
}

/// Container for projection use cases.
pub struct ProjectionUseCases {
    pub stock: Arc<ListStock>,
    pub products: Arc<ListProducts>,
}

impl ProjectionUseCases {
    pub fn new(stock: Arc<ListStock>, products: Arc<ListProducts>) -> Self {
        Self { stock, products }
    }
}
