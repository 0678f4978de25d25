//! Shared test utilities for the larder test suite.
//!
//! Provides a stock catalog fixture plus lookup helpers that panic with a
//! clear message on miss, so tests read as assertions instead of `Option`
//! plumbing.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = sample_catalog();
//! let recipe = find_recipe(&catalog, "Fried eggs");
//! assert_eq!(ingredient_names(recipe), vec!["eggs", "butter", "salt"]);
//! ```

use crate::catalog;
use crate::types::{Catalog, Recipe};

// =========================================================================
// Fixture catalog
// =========================================================================

/// A small well-formed catalog covering the interesting aggregation cases:
/// salt appears in three dishes, milk appears under two different measures.
pub const SAMPLE_CATALOG: &str = "\
Fried eggs
3
eggs | 3 | piece
butter | 20 | g
salt | 2 | g

Boiled potatoes
3
potatoes | 1000 | g
dill | 10 | g
salt | 3 | g

Tomato salad
3
tomatoes | 400 | g
olive oil | 30 | ml
salt | 1 | g

Porridge
2
oats | 80 | g
milk | 200 | ml

Milk shake
2
milk | 1 | cup
ice cream | 100 | g
";

/// Parse [`SAMPLE_CATALOG`]. Panics if the fixture itself is broken.
pub fn sample_catalog() -> Catalog {
    catalog::parse(SAMPLE_CATALOG.as_bytes()).expect("sample catalog must parse")
}

// =========================================================================
// Catalog lookups (panic with a clear message on miss)
// =========================================================================

/// Find a recipe by dish name. Panics if not found.
pub fn find_recipe<'a>(catalog: &'a Catalog, name: &str) -> &'a Recipe {
    catalog.get(name).unwrap_or_else(|| {
        let names: Vec<&str> = catalog.recipes().map(|r| r.name.as_str()).collect();
        panic!("dish '{name}' not found. Available: {names:?}")
    })
}

/// All ingredient names of a recipe, in catalog order.
pub fn ingredient_names(recipe: &Recipe) -> Vec<&str> {
    recipe
        .ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect()
}
