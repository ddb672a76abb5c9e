//! Top-down merge sort.
//!
//! `[start, end]` splits at `mid = (start + end) / 2`. Merging prefers the left element on ties,
//! and the merged run is written back into the working array before the `after-merge` step, so
//! every step's `array` reflects all merges completed so far.

use alloc::format;
use alloc::vec::Vec;

use crate::trace::join;
use crate::{Recorder, Side, Step, StepKind};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MergeSortEvent {
    Divide,
    BeforeMerge,
    /// `left[left_index]` was compared with `right[right_index]`; `side` won.
    Compare {
        left_index: usize,
        right_index: usize,
        side: Side,
    },
    /// One half ran out; the head of `side` is appended as-is.
    Remaining {
        left_index: usize,
        right_index: usize,
        side: Side,
    },
    AfterMerge,
    Complete,
}

impl StepKind for MergeSortEvent {
    fn tag(&self) -> &'static str {
        match self {
            Self::Divide => "divide",
            Self::BeforeMerge => "before-merge",
            Self::Compare { .. } => "compare",
            Self::Remaining { .. } => "remaining",
            Self::AfterMerge => "after-merge",
            Self::Complete => "complete",
        }
    }
}

/// Bounds of one recursive call: `[start, mid]` and `[mid + 1, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeRange {
    pub start: usize,
    pub mid: usize,
    pub end: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeSortState {
    pub array: Vec<i64>,
    /// Recursion depth of the call; together with `range` this locates the call-tree node.
    pub depth: usize,
    pub range: Option<MergeRange>,
    pub left: Vec<i64>,
    pub right: Vec<i64>,
    pub merged: Vec<i64>,
}

pub type MergeSortStep = Step<MergeSortEvent, MergeSortState>;

struct MergeSort<'a> {
    array: Vec<i64>,
    rec: &'a mut Recorder<MergeSortStep>,
}

impl MergeSort<'_> {
    fn sort(&mut self, start: usize, end: usize, depth: usize) -> Vec<i64> {
        if start >= end {
            return self.array[start..=end].to_vec();
        }

        let mid = (start + end) / 2;
        let range = MergeRange { start, mid, end };
        self.rec.record(
            MergeSortEvent::Divide,
            MergeSortState {
                array: self.array.clone(),
                depth,
                range: Some(range),
                ..MergeSortState::default()
            },
            format!(
                "Dividing array [{}] at index {mid}",
                join(&self.array[start..=end])
            ),
        );

        let left = self.sort(start, mid, depth + 1);
        let right = self.sort(mid + 1, end, depth + 1);

        let mut merged = Vec::with_capacity(left.len() + right.len());
        let snapshot = |array: &[i64], merged: &[i64]| MergeSortState {
            array: array.to_vec(),
            depth,
            range: Some(range),
            left: left.clone(),
            right: right.clone(),
            merged: merged.to_vec(),
        };

        self.rec.record(
            MergeSortEvent::BeforeMerge,
            snapshot(&self.array, &merged),
            format!("Merging left [{}] and right [{}]", join(&left), join(&right)),
        );

        let (mut li, mut ri) = (0, 0);
        while li < left.len() && ri < right.len() {
            let (l, r) = (left[li], right[ri]);
            let (side, message) = if l <= r {
                merged.push(l);
                (
                    Side::Left,
                    format!("Comparing {l} ≤ {r}: Choose {l} from left array"),
                )
            } else {
                merged.push(r);
                (
                    Side::Right,
                    format!("Comparing {l} > {r}: Choose {r} from right array"),
                )
            };
            self.rec.record(
                MergeSortEvent::Compare {
                    left_index: li,
                    right_index: ri,
                    side,
                },
                snapshot(&self.array, &merged),
                message,
            );
            match side {
                Side::Left => li += 1,
                Side::Right => ri += 1,
            }
        }

        while li < left.len() {
            merged.push(left[li]);
            self.rec.record(
                MergeSortEvent::Remaining {
                    left_index: li,
                    right_index: ri,
                    side: Side::Left,
                },
                snapshot(&self.array, &merged),
                format!("Adding remaining element {} from left array", left[li]),
            );
            li += 1;
        }

        while ri < right.len() {
            merged.push(right[ri]);
            self.rec.record(
                MergeSortEvent::Remaining {
                    left_index: li,
                    right_index: ri,
                    side: Side::Right,
                },
                snapshot(&self.array, &merged),
                format!("Adding remaining element {} from right array", right[ri]),
            );
            ri += 1;
        }

        self.array[start..=end].copy_from_slice(&merged);
        self.rec.record(
            MergeSortEvent::AfterMerge,
            MergeSortState {
                array: self.array.clone(),
                depth,
                range: Some(range),
                merged: merged.clone(),
                ..MergeSortState::default()
            },
            format!("Merged subarray: [{}]", join(&merged)),
        );

        merged
    }
}

/// Sorts a copy of `values`, returning every recorded step.
///
/// The last step is always [`MergeSortEvent::Complete`].
pub fn trace(values: &[i64]) -> Vec<MergeSortStep> {
    let mut rec = Recorder::new();
    let mut ms = MergeSort {
        array: values.to_vec(),
        rec: &mut rec,
    };
    if !values.is_empty() {
        ms.sort(0, values.len() - 1, 0);
    }
    let array = ms.array;

    rec.record(
        MergeSortEvent::Complete,
        MergeSortState {
            array,
            ..MergeSortState::default()
        },
        "Array sorted completely!".into(),
    );

    adebug!(len = values.len(), steps = rec.len(), "merge_sort::trace");
    rec.into_steps()
}
