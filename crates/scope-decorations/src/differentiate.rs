//! Differentiation indices
//!
//! Touching ranges that share a style would be merged by the host renderer.
//! Giving every range an index that differs from all ranges it touches, and
//! painting each index with its own handle, keeps them visually separate.
//! Nested ranges get a higher index than the ranges containing them, so
//! painting in increasing index order draws children over their parents.

use std::cmp::Ordering;

use crate::range::GeneralizedRange;
use crate::style::{DifferentiatedRange, DifferentiationIndex};

/// Assigns a differentiation index to every range.
///
/// Ranges are swept in start order; the output is in that order, one entry
/// per input range.
pub fn differentiate(ranges: &[GeneralizedRange]) -> Vec<DifferentiatedRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by(compare_by_start);

    let (differentiated, _) = sorted.into_iter().fold(
        (Vec::with_capacity(ranges.len()), Vec::new()),
        |(mut differentiated, active): (Vec<DifferentiatedRange>, Vec<DifferentiatedRange>), range| {
            // Anything that doesn't touch this range has ended before it
            // starts, so it can't touch anything later in the sweep either.
            let mut active: Vec<DifferentiatedRange> = active
                .into_iter()
                .filter(|previous| previous.range.touches(&range))
                .collect();

            let next = DifferentiatedRange {
                range,
                index: differentiation_index(&active, &range),
            };

            differentiated.push(next);
            active.push(next);
            (differentiated, active)
        },
    );

    tracing::trace!(
        ranges = differentiated.len(),
        max_index = differentiated.iter().map(|r| r.index).max(),
        "differentiated ranges"
    );

    differentiated
}

/// Smallest index unused by `active` that is also greater than the index of
/// any active range nested with `range`.
///
/// `active` must only hold ranges that touch `range`.
fn differentiation_index(
    active: &[DifferentiatedRange],
    range: &GeneralizedRange,
) -> DifferentiationIndex {
    let mut index = active
        .iter()
        .filter(|other| other.range.contains(range) || range.strictly_contains(&other.range))
        .map(|other| other.index + 1)
        .max()
        .unwrap_or(0);

    while active.iter().any(|other| other.index == index) {
        index += 1;
    }

    index
}

/// Orders ranges by start position.
///
/// Line ranges sort before character ranges starting on the same line. Ranges
/// of the same kind with the same start put the longer one first, so that a
/// container is always seen before the ranges it contains.
pub fn compare_by_start(a: &GeneralizedRange, b: &GeneralizedRange) -> Ordering {
    match (a, b) {
        (GeneralizedRange::Character(a), GeneralizedRange::Character(b)) => {
            a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end))
        }
        (GeneralizedRange::Line(a), GeneralizedRange::Line(b)) => {
            a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end))
        }
        (GeneralizedRange::Character(a), GeneralizedRange::Line(b)) => {
            a.start.line.cmp(&b.start).then(Ordering::Greater)
        }
        (GeneralizedRange::Line(a), GeneralizedRange::Character(b)) => {
            a.start.cmp(&b.start.line).then(Ordering::Less)
        }
    }
}
