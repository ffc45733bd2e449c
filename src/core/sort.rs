//! Comparators behind each sort criterion.
//!
//! All orderings go through `slice::sort_by`, which is stable, so items that
//! compare equal keep the order the filter stage produced.

use crate::domain::model::{FlatItem, SortCriterion};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub type Comparator = fn(&FlatItem, &FlatItem) -> Ordering;

impl SortCriterion {
    /// `None` for `Unsorted`.
    pub fn comparator(self) -> Option<Comparator> {
        match self {
            SortCriterion::PriceAscending => Some(cmp_price_asc),
            SortCriterion::PriceDescending => Some(cmp_price_desc),
            SortCriterion::NameAscending => Some(cmp_name_asc),
            SortCriterion::NameDescending => Some(cmp_name_desc),
            SortCriterion::Unsorted => None,
        }
    }
}

pub fn sort(mut items: Vec<FlatItem>, criterion: SortCriterion) -> Vec<FlatItem> {
    if let Some(comparator) = criterion.comparator() {
        items.sort_by(comparator);
    }
    items
}

pub fn cmp_price_asc(a: &FlatItem, b: &FlatItem) -> Ordering {
    compare_prices(a.price.numeric(), b.price.numeric(), false)
}

pub fn cmp_price_desc(a: &FlatItem, b: &FlatItem) -> Ordering {
    compare_prices(a.price.numeric(), b.price.numeric(), true)
}

pub fn cmp_name_asc(a: &FlatItem, b: &FlatItem) -> Ordering {
    compare_names(&a.name, &b.name)
}

pub fn cmp_name_desc(a: &FlatItem, b: &FlatItem) -> Ordering {
    compare_names(&a.name, &b.name).reverse()
}

// Unparseable prices go last whichever way the valid ones are ordered.
fn compare_prices(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ordering = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Letters compare without accents or case first ("Éclair" < "Eggplant");
/// names that still tie put lowercase before uppercase, then unaccented
/// before accented ("apple" < "Apple" < "banana").
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let primary = collation_key(a).cmp(collation_key(b));
    if primary != Ordering::Equal {
        return primary;
    }

    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.chars().count().cmp(&b.chars().count())
}

// NFD with combining marks dropped, then lowercased.
fn collation_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Item, Price};

    fn item(name: &str, price: impl Into<Price>, category: &str) -> FlatItem {
        FlatItem::tagged(&Item::new(name, price, format!("{}.png", name)), category)
    }

    fn names(items: &[FlatItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_price_ascending_orders_numerically() {
        let items = vec![
            item("ten", "10", "x"),
            item("nine", "9", "x"),
            item("half", "0.5", "x"),
            item("hundred", 100.0, "x"),
        ];

        let sorted = sort(items, SortCriterion::PriceAscending);
        assert_eq!(names(&sorted), vec!["half", "nine", "ten", "hundred"]);

        let values: Vec<f64> = sorted.iter().filter_map(|i| i.price.numeric()).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_price_descending() {
        let items = vec![item("a", "1", "x"), item("b", "3", "x"), item("c", "2", "x")];
        let sorted = sort(items, SortCriterion::PriceDescending);
        assert_eq!(names(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let items = vec![
            item("first", "1.00", "x"),
            item("cheap", "0.10", "x"),
            item("second", "1", "y"),
            item("third", 1.0, "z"),
        ];

        let asc = sort(items.clone(), SortCriterion::PriceAscending);
        assert_eq!(names(&asc), vec!["cheap", "first", "second", "third"]);

        let desc = sort(items, SortCriterion::PriceDescending);
        assert_eq!(names(&desc), vec!["first", "second", "third", "cheap"]);
    }

    #[test]
    fn test_malformed_prices_sort_last_in_both_directions() {
        let items = vec![
            item("bad1", "n/a", "x"),
            item("two", "2", "x"),
            item("missing", Price::Missing, "x"),
            item("one", "1", "x"),
            item("bad2", "", "x"),
        ];

        let asc = sort(items.clone(), SortCriterion::PriceAscending);
        assert_eq!(names(&asc), vec!["one", "two", "bad1", "missing", "bad2"]);

        let desc = sort(items, SortCriterion::PriceDescending);
        assert_eq!(names(&desc), vec!["two", "one", "bad1", "missing", "bad2"]);
    }

    #[test]
    fn test_name_sorts() {
        let items = vec![
            item("banana", "1", "x"),
            item("Cherry", "1", "x"),
            item("apple", "1", "x"),
        ];

        let asc = sort(items.clone(), SortCriterion::NameAscending);
        assert_eq!(names(&asc), vec!["apple", "banana", "Cherry"]);

        let desc = sort(items, SortCriterion::NameDescending);
        assert_eq!(names(&desc), vec!["Cherry", "banana", "apple"]);
    }

    #[test]
    fn test_name_sort_is_stable_for_identical_names() {
        let items = vec![
            item("Apple", "3", "first"),
            item("Apple", "1", "second"),
            item("Aardvark", "2", "x"),
        ];

        let sorted = sort(items, SortCriterion::NameDescending);
        let categories: Vec<&str> = sorted.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories, vec!["first", "second", "x"]);
    }

    #[test]
    fn test_compare_names_case_rules() {
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Apple", "apple"), Ordering::Greater);
        assert_eq!(compare_names("Apple", "banana"), Ordering::Less);
        assert_eq!(compare_names("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_names("app", "apple"), Ordering::Less);
        assert_eq!(compare_names("Water", "Water"), Ordering::Equal);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let items = vec![
            item("Zucchini", "1", "x"),
            item("Éclair", "1", "x"),
            item("Eggplant", "1", "x"),
            item("Fig", "1", "x"),
            item("Ångström bar", "1", "x"),
        ];

        let asc = sort(items.clone(), SortCriterion::NameAscending);
        assert_eq!(
            names(&asc),
            vec!["Ångström bar", "Éclair", "Eggplant", "Fig", "Zucchini"]
        );

        let desc = sort(items, SortCriterion::NameDescending);
        assert_eq!(
            names(&desc),
            vec!["Zucchini", "Fig", "Eggplant", "Éclair", "Ångström bar"]
        );
    }

    #[test]
    fn test_accent_and_case_only_break_ties() {
        assert_eq!(compare_names("éclair", "Eclair"), Ordering::Less);
        assert_eq!(compare_names("Eclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_names("Éclair", "eclairs"), Ordering::Less);
        // precomposed and decomposed forms share a primary key
        assert_eq!(compare_names("cafe\u{301}", "cafés"), Ordering::Less);
    }

    #[test]
    fn test_unsorted_returns_input() {
        let items = vec![item("b", "2", "x"), item("a", "1", "x")];
        assert_eq!(sort(items.clone(), SortCriterion::Unsorted), items);
        assert_eq!(sort(items.clone(), SortCriterion::from_token("bogus")), items);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let items = vec![
            item("b", "2", "x"),
            item("a", "2", "y"),
            item("c", "oops", "x"),
            item("d", "1", "y"),
        ];
        for criterion in SortCriterion::RECOGNIZED {
            let once = sort(items.clone(), criterion);
            let twice = sort(once.clone(), criterion);
            assert_eq!(once, twice, "{:?}", criterion);
        }
    }
}
