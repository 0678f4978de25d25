//! Shopping list aggregation.
//!
//! Turns "cook these dishes for this many people" into a flat list of
//! ingredients to buy. Quantities scale linearly with the head count, and
//! an ingredient shared by several dishes is folded into a single entry
//! whose quantity is the sum of the contributions. Measures are carried
//! along verbatim from the catalog; no unit conversion happens here, so
//! the first dish to mention an ingredient decides the measure shown.
//!
//! Requesting a dish the catalog does not know is not fatal: the dish is
//! recorded under [`ShoppingList::missing`] and the rest of the request
//! still contributes. Callers decide how loudly to surface the misses.

use crate::types::Catalog;
use serde::Serialize;

/// One line of the aggregated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingItem {
    pub name: String,
    /// Total quantity across all requested dishes, already scaled by the
    /// number of persons.
    pub quantity: u64,
    /// Measure of the first catalog occurrence of this ingredient.
    pub measure: String,
}

/// Result of aggregating one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShoppingList {
    /// Aggregated items, in the order ingredients were first encountered.
    pub items: Vec<ShoppingItem>,
    /// Requested dishes the catalog has no recipe for, one entry per
    /// request. Non-fatal diagnostics.
    pub missing: Vec<String>,
}

impl ShoppingList {
    /// True when every requested dish was found in the catalog.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Aggregate the ingredients of `dishes`, scaled for `persons` people.
///
/// Dishes are processed in request order and may repeat; a dish named
/// twice contributes twice. Lookup is by exact name. Quantities saturate
/// at `u64::MAX` instead of overflowing.
pub fn shopping_list(dishes: &[String], persons: u64, catalog: &Catalog) -> ShoppingList {
    let mut list = ShoppingList::default();

    for dish in dishes {
        let Some(recipe) = catalog.get(dish) else {
            list.missing.push(dish.clone());
            continue;
        };
        for ingredient in &recipe.ingredients {
            let amount = ingredient.quantity.saturating_mul(persons);
            match list
                .items
                .iter_mut()
                .find(|item| item.name == ingredient.name)
            {
                Some(item) => item.quantity = item.quantity.saturating_add(amount),
                None => list.items.push(ShoppingItem {
                    name: ingredient.name.clone(),
                    quantity: amount,
                    measure: ingredient.measure.clone(),
                }),
            }
        }
    }

    list
}
