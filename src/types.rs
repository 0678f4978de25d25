//! Shared data shapes used across operations.
//!
//! The parser produces a [`Catalog`]; the shopping aggregator consumes it.
//! The two operations are otherwise independent, so these types are the
//! whole of their coupling.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// A single ingredient requirement within a dish.
///
/// Immutable once parsed. Quantities are non-negative integers in whatever
/// unit `measure` names; the toolkit never converts between measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    /// Ingredient name, exactly as written in the catalog.
    pub name: String,
    /// Amount per single serving.
    pub quantity: u64,
    /// Unit label (`g`, `ml`, `piece`, ...), opaque to the toolkit.
    pub measure: String,
}

/// A named dish and its ingredient list, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    /// Dish name, the unique key within a [`Catalog`].
    pub name: String,
    /// Ingredients in the order they appear in the catalog file.
    pub ingredients: Vec<Ingredient>,
}

/// The full set of parsed dishes, keyed by dish name.
///
/// Keys are unique: inserting a recipe whose name is already present
/// replaces the earlier one (later catalog blocks win). Iteration order is
/// name order, which keeps console and JSON output deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    dishes: BTreeMap<String, Recipe>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a recipe, replacing any existing recipe with the same name.
    pub fn insert(&mut self, recipe: Recipe) {
        self.dishes.insert(recipe.name.clone(), recipe);
    }

    /// Look up a dish by its exact name.
    pub fn get(&self, dish: &str) -> Option<&Recipe> {
        self.dishes.get(dish)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// All recipes in dish-name order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.dishes.values()
    }

    /// Render the catalog back into the flat-text file format.
    ///
    /// The inverse of [`catalog::parse`](crate::catalog::parse): parsing
    /// the returned text yields an equal catalog. Dishes are written in
    /// name order, each block terminated by the blank separator line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for recipe in self.dishes.values() {
            let _ = writeln!(out, "{}", recipe.name);
            let _ = writeln!(out, "{}", recipe.ingredients.len());
            for ing in &recipe.ingredients {
                let _ = writeln!(out, "{} | {} | {}", ing.name, ing.quantity, ing.measure);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salt(quantity: u64) -> Ingredient {
        Ingredient {
            name: "salt".to_string(),
            quantity,
            measure: "g".to_string(),
        }
    }

    #[test]
    fn insert_replaces_duplicate_dish() {
        let mut catalog = Catalog::new();
        catalog.insert(Recipe {
            name: "Soup".to_string(),
            ingredients: vec![salt(1)],
        });
        catalog.insert(Recipe {
            name: "Soup".to_string(),
            ingredients: vec![salt(9)],
        });

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Soup").unwrap().ingredients[0].quantity, 9);
    }

    #[test]
    fn get_is_exact_match() {
        let mut catalog = Catalog::new();
        catalog.insert(Recipe {
            name: "Soup".to_string(),
            ingredients: vec![],
        });

        assert!(catalog.get("Soup").is_some());
        assert!(catalog.get("soup").is_none());
        assert!(catalog.get("Soup ").is_none());
    }

    #[test]
    fn to_text_writes_blocks_with_separators() {
        let mut catalog = Catalog::new();
        catalog.insert(Recipe {
            name: "Omelette".to_string(),
            ingredients: vec![
                Ingredient {
                    name: "eggs".to_string(),
                    quantity: 2,
                    measure: "piece".to_string(),
                },
                Ingredient {
                    name: "milk".to_string(),
                    quantity: 100,
                    measure: "ml".to_string(),
                },
            ],
        });

        assert_eq!(
            catalog.to_text(),
            "Omelette\n2\neggs | 2 | piece\nmilk | 100 | ml\n\n"
        );
    }

    #[test]
    fn empty_catalog_renders_empty_text() {
        assert_eq!(Catalog::new().to_text(), "");
    }
}
