use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A product category as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    /// Number of published products, when the catalog reports it.
    pub count: Option<u32>,
}

/// Keeps only the categories an operator has activated.
///
/// The result follows the order of `all`, never the iteration order of
/// `active`. Ids in `active` that the catalog does not know are ignored.
#[must_use]
pub fn filter_active_categories(all: &[Category], active: &HashSet<u64>) -> Vec<Category> {
    all.iter()
        .filter(|category| active.contains(&category.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: u64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            slug: name.to_lowercase(),
            count: None,
        }
    }

    #[test]
    fn keeps_full_list_order_not_activation_order() {
        let all = vec![category(1, "A"), category(2, "B"), category(3, "C")];
        let active: HashSet<u64> = [3, 1].into_iter().collect();
        let filtered = filter_active_categories(&all, &active);
        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn empty_activation_set_yields_nothing() {
        let all = vec![category(1, "A"), category(2, "B")];
        assert!(filter_active_categories(&all, &HashSet::new()).is_empty());
    }

    #[test]
    fn unknown_active_ids_are_ignored() {
        let all = vec![category(1, "A")];
        let active: HashSet<u64> = [1, 404].into_iter().collect();
        let filtered = filter_active_categories(&all, &active);
        assert_eq!(filtered, vec![category(1, "A")]);
    }
}
