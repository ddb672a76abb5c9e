//! Quicksort with the Hoare partition scheme.
//!
//! The pivot is the first element of the current subrange. The left pointer starts at `lo`, the
//! right pointer at `hi + 1`; both move before comparing, and partitioning ends once they cross.
//! The pivot is then swapped into the right pointer's slot, and the left subrange is sorted
//! before the right one.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use crate::{Recorder, Span, Step, StepKind};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuickSortEvent {
    /// The input was empty; nothing to sort.
    Empty,
    /// A recursive call starts on `state.range`.
    Start,
    /// A singleton subrange is already in its final position.
    Sorted { index: usize },
    PivotSelected { index: usize, value: i64 },
    PartitionStart { pivot: usize },
    /// The left pointer moved to `i`.
    MoveLeft { i: usize },
    /// The right pointer moved to `j`.
    MoveRight { j: usize },
    Crossed { i: usize, j: usize },
    /// About to exchange `i` and `j`.
    Swap { i: usize, j: usize },
    /// `i` and `j` have been exchanged.
    Swapped { i: usize, j: usize },
    MovePivot { from: usize, to: usize },
    PivotPlaced { index: usize },
    Complete,
}

impl StepKind for QuickSortEvent {
    fn tag(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Start => "start",
            Self::Sorted { .. } => "sorted",
            Self::PivotSelected { .. } => "pivot",
            Self::PartitionStart { .. } => "partition",
            Self::MoveLeft { .. } => "move-left",
            Self::MoveRight { .. } => "move-right",
            Self::Crossed { .. } => "crossed",
            Self::Swap { .. } => "swap",
            Self::Swapped { .. } => "swapped",
            Self::MovePivot { .. } => "move-pivot",
            Self::PivotPlaced { .. } => "pivot-placed",
            Self::Complete => "complete",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuickSortState {
    pub array: Vec<i64>,
    pub pivot: Option<usize>,
    /// Left pointer, when it is inside the subrange.
    pub left: Option<usize>,
    /// Right pointer, when it is inside the subrange.
    pub right: Option<usize>,
    /// Indices already in their final position, ascending.
    pub sorted: Vec<usize>,
    /// Indices being compared or moved by this step.
    pub current: Vec<usize>,
    pub range: Option<Span>,
    pub depth: usize,
}

pub type QuickSortStep = Step<QuickSortEvent, QuickSortState>;

#[derive(Clone, Copy, Default)]
struct Pointers {
    pivot: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}

struct QuickSort<'a> {
    array: Vec<i64>,
    placed: Vec<bool>,
    span: Option<Span>,
    depth: usize,
    rec: &'a mut Recorder<QuickSortStep>,
}

impl QuickSort<'_> {
    fn record(
        &mut self,
        event: QuickSortEvent,
        pointers: Pointers,
        current: Vec<usize>,
        message: alloc::string::String,
    ) {
        let state = QuickSortState {
            array: self.array.clone(),
            pivot: pointers.pivot,
            left: pointers.left,
            right: pointers.right,
            sorted: self.sorted_indices(),
            current,
            range: self.span,
            depth: self.depth,
        };
        self.rec.record(event, state, message);
    }

    fn sorted_indices(&self) -> Vec<usize> {
        self.placed
            .iter()
            .enumerate()
            .filter_map(|(i, &placed)| placed.then_some(i))
            .collect()
    }

    fn sort(&mut self, lo: usize, hi: usize, depth: usize) {
        self.span = Some(Span::new(lo, hi));
        self.depth = depth;
        self.record(
            QuickSortEvent::Start,
            Pointers::default(),
            Vec::new(),
            format!("Starting quicksort on subarray [{lo}...{hi}]"),
        );

        if lo == hi {
            self.placed[lo] = true;
            self.record(
                QuickSortEvent::Sorted { index: lo },
                Pointers::default(),
                vec![lo],
                format!("Element at index {lo} is in its sorted position."),
            );
            return;
        }

        let value = self.array[lo];
        self.record(
            QuickSortEvent::PivotSelected { index: lo, value },
            Pointers {
                pivot: Some(lo),
                ..Pointers::default()
            },
            vec![lo],
            format!("Selected pivot: {value} (index {lo})"),
        );

        let p = self.partition(lo, hi);
        if p > lo {
            self.sort(lo, p - 1, depth + 1);
        }
        if p < hi {
            self.sort(p + 1, hi, depth + 1);
        }
    }

    fn partition(&mut self, lo: usize, hi: usize) -> usize {
        let pivot = self.array[lo];
        let mut i = lo;
        let mut j = hi + 1;
        let inside = |k: usize| (k <= hi).then_some(k);

        self.record(
            QuickSortEvent::PartitionStart { pivot: lo },
            Pointers {
                pivot: Some(lo),
                left: Some(i),
                right: None,
            },
            vec![lo],
            format!("Starting Hoare partition with pivot {pivot} at index {lo}"),
        );

        loop {
            loop {
                i += 1;
                if i <= hi {
                    self.record(
                        QuickSortEvent::MoveLeft { i },
                        Pointers {
                            pivot: Some(lo),
                            left: Some(i),
                            right: inside(j),
                        },
                        vec![i, lo],
                        format!(
                            "Left pointer (i) at index {i}, comparing {} with pivot {pivot}",
                            self.array[i]
                        ),
                    );
                }
                if !(i <= hi && self.array[i] < pivot) {
                    break;
                }
            }

            // a[lo] == pivot is never exchanged before the end, so j stops at lo at the latest.
            loop {
                j -= 1;
                self.record(
                    QuickSortEvent::MoveRight { j },
                    Pointers {
                        pivot: Some(lo),
                        left: inside(i),
                        right: Some(j),
                    },
                    vec![j, lo],
                    format!(
                        "Right pointer (j) at index {j}, comparing {} with pivot {pivot}",
                        self.array[j]
                    ),
                );
                if self.array[j] <= pivot {
                    break;
                }
            }

            let pointers = Pointers {
                pivot: Some(lo),
                left: inside(i),
                right: Some(j),
            };
            if i >= j {
                self.record(
                    QuickSortEvent::Crossed { i, j },
                    pointers,
                    vec![i, j],
                    format!("Pointers crossed or met (i={i}, j={j}), partition complete"),
                );
                break;
            }

            self.record(
                QuickSortEvent::Swap { i, j },
                pointers,
                vec![i, j],
                format!(
                    "Swapping elements: {} at index {i} with {} at index {j}",
                    self.array[i], self.array[j]
                ),
            );
            self.array.swap(i, j);
            self.record(
                QuickSortEvent::Swapped { i, j },
                pointers,
                vec![i, j],
                format!(
                    "After swap: {} at index {i}, {} at index {j}",
                    self.array[i], self.array[j]
                ),
            );
        }

        self.record(
            QuickSortEvent::MovePivot { from: lo, to: j },
            Pointers {
                pivot: Some(lo),
                left: None,
                right: Some(j),
            },
            vec![lo, j],
            format!("Moving pivot {pivot} to its final position at index {j}"),
        );
        self.array.swap(lo, j);
        self.placed[j] = true;
        self.record(
            QuickSortEvent::PivotPlaced { index: j },
            Pointers {
                pivot: Some(j),
                ..Pointers::default()
            },
            vec![j],
            format!("Pivot {pivot} is now in its sorted position at index {j}"),
        );
        j
    }
}

/// Sorts a copy of `values`, returning every recorded step.
///
/// The last step is always [`QuickSortEvent::Complete`] and carries the sorted array.
pub fn trace(values: &[i64]) -> Vec<QuickSortStep> {
    let mut rec = Recorder::new();
    let mut qs = QuickSort {
        array: values.to_vec(),
        placed: vec![false; values.len()],
        span: None,
        depth: 0,
        rec: &mut rec,
    };

    if values.is_empty() {
        qs.record(
            QuickSortEvent::Empty,
            Pointers::default(),
            Vec::new(),
            "Array is empty, nothing to sort.".into(),
        );
    } else {
        qs.sort(0, values.len() - 1, 0);
    }

    qs.placed.iter_mut().for_each(|p| *p = true);
    qs.span = None;
    qs.depth = 0;
    qs.record(
        QuickSortEvent::Complete,
        Pointers::default(),
        Vec::new(),
        "Sorting complete!".into(),
    );

    adebug!(len = values.len(), steps = rec.len(), "quick_sort::trace");
    rec.into_steps()
}
