use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog-assigned product identifier, unique within one catalog snapshot
pub type ProductId = u32;

/// A product as fetched from the catalog. Never mutated after the fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URL
    pub image: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// 0.0 to 5.0
    pub rate: f64,
    pub count: u32,
}

/// Which category the list is restricted to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` maps to `All`, anything else selects that category
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// Step to the next entry of `All, categories[0], categories[1], ...`,
    /// wrapping back to `All`
    pub fn cycle(&self, categories: &[String]) -> Self {
        let next_index = match self {
            CategoryFilter::All => 0,
            CategoryFilter::Only(current) => categories
                .iter()
                .position(|c| c == current)
                .map(|i| i + 1)
                .unwrap_or(categories.len()),
        };

        categories
            .get(next_index)
            .map(|c| CategoryFilter::Only(c.clone()))
            .unwrap_or(CategoryFilter::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// How the filtered list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep catalog order
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            SortOrder::None => SortOrder::PriceAscending,
            SortOrder::PriceAscending => SortOrder::PriceDescending,
            SortOrder::PriceDescending => SortOrder::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::None => "None",
            SortOrder::PriceAscending => "Low→High",
            SortOrder::PriceDescending => "High→Low",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SortOrder::None),
            "asc" | "price-asc" => Ok(SortOrder::PriceAscending),
            "desc" | "price-desc" => Ok(SortOrder::PriceDescending),
            other => Err(format!("unknown sort order '{}' (expected none, asc or desc)", other)),
        }
    }
}

/// Everything the user can narrow the catalog by
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub sort: SortOrder,
    /// Case-insensitive substring; empty matches everything
    pub search: String,
}

/// One slot of the pager control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    /// Skipped range; not selectable
    Ellipsis,
}

impl PageLabel {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageLabel::Page(n) => Some(*n),
            PageLabel::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLabel::Page(n) => write!(f, "{}", n),
            PageLabel::Ellipsis => write!(f, "..."),
        }
    }
}
