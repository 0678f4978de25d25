//! # Larder
//!
//! A plain-text cookbook toolkit. Your recipes live in one flat text file:
//! larder parses it into a catalog, scales shopping lists for any head
//! count, and bundles loose kitchen notes into a single ordered file.
//!
//! # Architecture: Three Independent Operations
//!
//! ```text
//! 1. Check    recipes.txt   ->  Catalog         (flat text to structured data)
//! 2. Shop     dishes x N    ->  ShoppingList    (catalog lookups + aggregation)
//! 3. Bundle   notes/        ->  bundle.txt      (flat directory to one file)
//! ```
//!
//! The operations share the catalog types but never feed each other; each
//! is a small pure-ish function over its inputs, so unit tests exercise
//! them without a CLI in the loop.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Parses the flat-text recipe catalog into a [`types::Catalog`] |
//! | [`shopping`] | Aggregates scaled shopping lists from catalog lookups |
//! | [`bundle`] | Folds a flat notes directory into one ordered bundle file |
//! | [`config`] | `larder.toml` loading and validation |
//! | [`types`] | Shared data shapes (`Ingredient`, `Recipe`, `Catalog`) |
//! | [`output`] | CLI output formatting for all commands |
//!
//! # Design Decisions
//!
//! ## All-or-Nothing Parsing
//!
//! A malformed catalog block aborts the whole parse with an error naming
//! the offending dish. Returning a partial catalog would let a typo
//! silently drop recipes, and the failure would only surface mid shopping
//! trip. Missing dishes at shopping time are the opposite case: they are
//! recorded as diagnostics and never fatal, because a half-known menu
//! still deserves a list for the half the catalog knows.
//!
//! ## Whole Quantities Only
//!
//! Quantities are unsigned integers. The catalog format writes amounts the
//! way recipe cards do ("2 eggs", "100 ml"), and scaling by a head count
//! keeps them whole. There is no unit conversion: milk in "ml" and milk in
//! "cup" are summed per name with the measure taken from the first dish
//! encountered, which keeps aggregation honest about what it knows.
//!
//! ## Deterministic Bundles
//!
//! Bundle blocks are ordered by line count with ties broken by file name,
//! so the same directory always produces the same bytes. All sources are
//! read before the output is written, and a previous run's output found in
//! the directory is excluded by path, never folded into itself.
//!
//! # The Flat-Text Premise
//!
//! No database, no markup. A recipe catalog is readable and editable in
//! any editor, diffs cleanly under version control, and survives decades
//! of tooling churn. The price is a strict line format, which is why
//! `larder check` exists.

pub mod bundle;
pub mod catalog;
pub mod config;
pub mod output;
pub mod shopping;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
