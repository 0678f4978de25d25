//! Recipe catalog parsing.
//!
//! Reads a flat-text catalog into a [`Catalog`] mapping dish names to their
//! ingredient lists. The file is a sequence of dish blocks:
//!
//! ```text
//! Omelette              <- dish name
//! 3                     <- ingredient count N
//! eggs | 2 | piece      <- N lines: name | quantity | measure
//! milk | 100 | ml
//! butter | 20 | g
//!                       <- blank separator line
//! Baked potato
//! 2
//! potatoes | 1000 | g
//! cheese | 50 | g
//! ```
//!
//! An empty line where a dish name is expected ends parsing; that is the
//! normal way to terminate a catalog, not an error. End of stream works the
//! same way. Whitespace around lines and around the three ` | `-separated
//! fields is trimmed before interpretation.
//!
//! ## Validation
//!
//! Parsing is all-or-nothing: the first malformed block aborts the whole
//! parse and no partial catalog is returned. Every error names the dish
//! (and where it applies, the ingredient) so the message can be shown to
//! the user as-is:
//! - a count line that is not a non-negative decimal integer,
//! - an ingredient line without exactly three ` | `-separated fields,
//! - a quantity that is not a non-negative integer,
//! - a block that ends (blank line or end of stream) before N ingredient
//!   lines were read.
//!
//! Later blocks with an already-seen dish name replace the earlier recipe.

use crate::types::{Catalog, Ingredient, Recipe};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Recipe catalog not found: {0}")]
    NotFound(PathBuf),
    #[error("Dish '{dish}': ingredient count is not a number: {value:?}")]
    BadIngredientCount { dish: String, value: String },
    #[error("Dish '{dish}': expected {expected} ingredients, found only {found}")]
    TruncatedDish {
        dish: String,
        expected: usize,
        found: usize,
    },
    #[error("Dish '{dish}': malformed ingredient line {line:?} (expected `name | quantity | measure`)")]
    BadIngredientLine { dish: String, line: String },
    #[error("Dish '{dish}': quantity for ingredient '{ingredient}' is not a number: {value:?}")]
    BadQuantity {
        dish: String,
        ingredient: String,
        value: String,
    },
    #[error("Failed to read recipe catalog: {0}")]
    Read(#[from] io::Error),
    #[error("Failed to read recipe catalog {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
}

/// Field separator within an ingredient line. The token is literal: a pipe
/// without the surrounding spaces does not split a field.
const FIELD_SEPARATOR: &str = " | ";

/// Load and parse a catalog file.
///
/// A missing file maps to [`CatalogError::NotFound`]; every other I/O
/// failure, at open or mid-stream, surfaces as [`CatalogError::ReadFile`]
/// naming the file.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
        _ => CatalogError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    parse(BufReader::new(file)).map_err(|err| match err {
        CatalogError::Read(source) => CatalogError::ReadFile {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse a catalog from any buffered reader.
///
/// Pure transform of the input stream; the reader is consumed up to the
/// terminating empty line (content after it is never read).
pub fn parse<R: BufRead>(input: R) -> Result<Catalog, CatalogError> {
    let mut lines = input.lines();
    let mut catalog = Catalog::new();

    while let Some(line) = lines.next() {
        let dish = line?.trim().to_string();
        if dish.is_empty() {
            break;
        }
        let recipe = parse_block(&mut lines, dish)?;
        catalog.insert(recipe);
        // One separator line is consumed and discarded, whatever it holds.
        // End of stream here is fine.
        if let Some(separator) = lines.next() {
            separator?;
        }
    }

    Ok(catalog)
}

/// Parse the remainder of one dish block: the count line and N ingredient
/// lines. `dish` is the already-read name line.
fn parse_block<R: BufRead>(
    lines: &mut io::Lines<R>,
    dish: String,
) -> Result<Recipe, CatalogError> {
    // End of stream at the count position reads as an empty string, which
    // then fails the integer parse with this position's own error.
    let raw_count = match lines.next() {
        Some(line) => line?.trim().to_string(),
        None => String::new(),
    };
    let expected: usize =
        raw_count
            .parse()
            .map_err(|_| CatalogError::BadIngredientCount {
                dish: dish.clone(),
                value: raw_count.clone(),
            })?;

    let mut ingredients = Vec::new();
    for found in 0..expected {
        let line = match lines.next() {
            Some(line) => line?.trim().to_string(),
            None => String::new(),
        };
        // An empty line inside a block means the dish ended early.
        if line.is_empty() {
            return Err(CatalogError::TruncatedDish {
                dish,
                expected,
                found,
            });
        }
        ingredients.push(parse_ingredient(&dish, &line)?);
    }

    Ok(Recipe {
        name: dish,
        ingredients,
    })
}

/// Parse one `name | quantity | measure` line.
fn parse_ingredient(dish: &str, line: &str) -> Result<Ingredient, CatalogError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(CatalogError::BadIngredientLine {
            dish: dish.to_string(),
            line: line.to_string(),
        });
    }

    let name = fields[0].trim().to_string();
    let raw_quantity = fields[1].trim();
    let quantity = raw_quantity
        .parse::<u64>()
        .map_err(|_| CatalogError::BadQuantity {
            dish: dish.to_string(),
            ingredient: name.clone(),
            value: raw_quantity.to_string(),
        })?;
    let measure = fields[2].trim().to_string();

    Ok(Ingredient {
        name,
        quantity,
        measure,
    })
}
