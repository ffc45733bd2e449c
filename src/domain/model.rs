use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category selector value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Price exactly as the catalog supplied it.
///
/// Catalog files mix JSON numbers and strings (`"1.50"`), so the raw value is
/// kept for display and only coerced to a number when sorting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
    #[default]
    Missing,
    Other(serde_json::Value),
}

impl Price {
    /// Numeric value used for ordering. `None` stands for not-a-number:
    /// missing values, empty or non-numeric text, and non-finite results.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Price::Number(number) => number.as_f64().filter(|v| v.is_finite()),
            Price::Text(text) => parse_decimal(text),
            Price::Missing | Price::Other(_) => None,
        }
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    // f64::from_str also accepts "inf" and "NaN", which are not prices
    let plain = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
    if !plain {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(number) => write!(f, "{}", number),
            Price::Text(text) => f.write_str(text),
            Price::Missing => Ok(()),
            Price::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Price::Text(text.to_string())
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Price::Number)
            .unwrap_or(Price::Missing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub image: String,
}

impl Item {
    pub fn new(name: impl Into<String>, price: impl Into<Price>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            image: image.into(),
        }
    }
}

/// An item tagged with the category it was listed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatItem {
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: String,
}

impl FlatItem {
    pub fn tagged(item: &Item, category: &str) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.clone(),
            image: item.image.clone(),
            category: category.to_string(),
        }
    }
}

/// Category name -> items, in the order the categories were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, Vec<Item>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, name: impl Into<String>, items: Vec<Item>) -> Self {
        self.categories.insert(name.into(), items);
        self
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.categories
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn items(&self, category: &str) -> Option<&[Item]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn item_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Raw selector values as the controls expose them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub category: String,
    pub sort: String,
}

impl Selection {
    pub fn new(category: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            sort: sort.into(),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(ALL_CATEGORIES, "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    All,
    Only(String),
}

impl CategorySelection {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(category) => category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    PriceAscending,
    PriceDescending,
    NameAscending,
    NameDescending,
    /// Any unrecognized selector value; leaves the order untouched.
    Unsorted,
}

impl SortCriterion {
    pub const RECOGNIZED: [SortCriterion; 4] = [
        SortCriterion::PriceAscending,
        SortCriterion::PriceDescending,
        SortCriterion::NameAscending,
        SortCriterion::NameDescending,
    ];

    pub fn from_token(token: &str) -> Self {
        match token {
            "priceAscending" => SortCriterion::PriceAscending,
            "priceDescending" => SortCriterion::PriceDescending,
            "nameAscending" => SortCriterion::NameAscending,
            "nameDescending" => SortCriterion::NameDescending,
            _ => SortCriterion::Unsorted,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            SortCriterion::PriceAscending => "priceAscending",
            SortCriterion::PriceDescending => "priceDescending",
            SortCriterion::NameAscending => "nameAscending",
            SortCriterion::NameDescending => "nameDescending",
            SortCriterion::Unsorted => "",
        }
    }
}
