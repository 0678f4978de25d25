//! CLI output formatting for all commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (dish, shopping item, bundled note) is its semantic
//! identity, a positional index plus its name, with details shown as
//! indented context lines or a trailing `name: value` pair.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! 001 Boiled potatoes (3 ingredients)
//!     potatoes: 1000 g
//!     dill: 10 g
//!     salt: 3 g
//! 002 Fried eggs (3 ingredients)
//!     ...
//! Catalog holds 2 dishes
//! ```
//!
//! ## Shop
//!
//! ```text
//! Shopping list for 4 persons
//! 001 eggs: 12 piece
//! 002 butter: 80 g
//!
//! Not in the catalog
//!     Dragon stew
//! ```
//!
//! ## Bundle
//!
//! ```text
//! 001 void.txt (0 lines)
//! 002 short.txt (1 lines)
//! 003 long.txt (5 lines)
//! Bundled 3 files into notes/bundle.txt
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::bundle::BundleSummary;
use crate::shopping::ShoppingList;
use crate::types::Catalog;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Check output
// ============================================================================

/// Format the catalog overview: one block per dish, ingredients as
/// indented context lines, and a trailing dish count.
pub fn format_catalog(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, recipe) in catalog.recipes().enumerate() {
        lines.push(format!(
            "{} {} ({} ingredients)",
            format_index(i + 1),
            recipe.name,
            recipe.ingredients.len()
        ));
        for ing in &recipe.ingredients {
            lines.push(format!("    {}: {} {}", ing.name, ing.quantity, ing.measure));
        }
    }

    lines.push(format!("Catalog holds {} dishes", catalog.len()));
    lines
}

/// Print the catalog overview to stdout.
pub fn print_catalog(catalog: &Catalog) {
    for line in format_catalog(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// Shop output
// ============================================================================

/// Format an aggregated shopping list.
///
/// Items lead with their positional index; dishes the catalog does not
/// know land in a separate section at the end.
pub fn format_shopping(list: &ShoppingList, persons: u64) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Shopping list for {} persons", persons));
    for (i, item) in list.items.iter().enumerate() {
        lines.push(format!(
            "{} {}: {} {}",
            format_index(i + 1),
            item.name,
            item.quantity,
            item.measure
        ));
    }

    if !list.missing.is_empty() {
        lines.push(String::new());
        lines.push("Not in the catalog".to_string());
        for dish in &list.missing {
            lines.push(format!("    {}", dish));
        }
    }

    lines
}

/// Print a shopping list to stdout.
pub fn print_shopping(list: &ShoppingList, persons: u64) {
    for line in format_shopping(list, persons) {
        println!("{}", line);
    }
}

// ============================================================================
// Bundle output
// ============================================================================

/// Format a bundle report: one line per block in written order, then a
/// trailing summary naming the output file.
pub fn format_bundle(summary: &BundleSummary) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, file) in summary.files.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} lines)",
            format_index(i + 1),
            file.name,
            file.line_count
        ));
    }

    lines.push(format!(
        "Bundled {} files ({} lines) into {}",
        summary.files.len(),
        summary.total_lines,
        summary.output.display()
    ));
    lines
}

/// Print a bundle report to stdout.
pub fn print_bundle(summary: &BundleSummary) {
    for line in format_bundle(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
