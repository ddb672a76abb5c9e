//! Input gate run before an engine is invoked.
//!
//! Presentation layers hand raw text or sizes to these helpers; engines only ever see values
//! that passed them.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::ops::RangeInclusive;

use rand::Rng;

use crate::{InputError, TraceLimits};

/// Parses a comma and/or whitespace separated list of integers.
pub fn parse_values(text: &str) -> Result<Vec<i64>, InputError> {
    let mut values = Vec::new();
    for token in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let value = token.parse::<i64>().map_err(|_| InputError::NotANumber {
            token: token.to_string(),
        })?;
        values.push(value);
    }
    if values.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(values)
}

/// Parses the key typed into the tree page's key field.
pub fn parse_key(text: &str) -> Result<i64, InputError> {
    let token = text.trim();
    if token.is_empty() {
        return Err(InputError::MissingKey);
    }
    token.parse::<i64>().map_err(|_| InputError::NotANumber {
        token: token.to_string(),
    })
}

/// Truncates `values` to `cap` elements.
pub fn cap_len(mut values: Vec<i64>, cap: usize) -> Vec<i64> {
    if values.len() > cap {
        awarn!(len = values.len(), cap, "input truncated to visualization cap");
        values.truncate(cap);
    }
    values
}

/// Accepts an N-Queens board size within `limits.queens_board`.
pub fn board_size(size: usize, limits: &TraceLimits) -> Result<usize, InputError> {
    if limits.queens_board.contains(&size) {
        Ok(size)
    } else {
        Err(InputError::BoardSize {
            size,
            min: *limits.queens_board.start(),
            max: *limits.queens_board.end(),
        })
    }
}

/// Caps a union-find element count at `limits.union_find_elements`.
pub fn element_count(elements: usize, limits: &TraceLimits) -> usize {
    if elements > limits.union_find_elements {
        awarn!(
            elements,
            cap = limits.union_find_elements,
            "element count truncated to visualization cap"
        );
    }
    elements.min(limits.union_find_elements)
}

/// Generates `len` random values drawn uniformly from `range`.
///
/// Panics if `range` is empty, like `Rng::gen_range`.
pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}
