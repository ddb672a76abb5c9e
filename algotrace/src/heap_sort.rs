//! Heap sort over a binary max-heap stored in the array itself.
//!
//! Heapify sinks every internal node from `n / 2 - 1` down to `0`. Sort-down then repeatedly
//! swaps the root with the last heap slot, prepends the extracted maximum to the sorted output
//! and re-sinks the new root.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{Recorder, Side, Step, StepKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapPhase {
    Heapify,
    SortDown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapSortEvent {
    Initial,
    Phase { phase: HeapPhase },
    CompareChildren {
        parent: usize,
        left: usize,
        right: usize,
    },
    /// The larger child was chosen; the right child only wins when strictly greater.
    SelectChild {
        parent: usize,
        child: usize,
        side: Side,
    },
    CompareParent { parent: usize, child: usize },
    NoSwap { parent: usize, child: usize },
    /// About to exchange a parent with its larger child.
    Swap { parent: usize, child: usize },
    /// The sinking element now sits at `index`.
    Moved { index: usize },
    /// About to exchange the root with the last heap slot.
    SwapRoot { last: usize },
    Extract { index: usize, value: i64 },
    Complete,
}

impl StepKind for HeapSortEvent {
    fn tag(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Phase { .. } => "phase-change",
            Self::CompareChildren { .. } | Self::CompareParent { .. } => "compare",
            Self::SelectChild { .. } => "select",
            Self::NoSwap { .. } => "no-swap",
            Self::Swap { .. } | Self::SwapRoot { .. } => "swap",
            Self::Moved { .. } => "moved",
            Self::Extract { .. } => "extract",
            Self::Complete => "complete",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeapSortState {
    pub heap: Vec<i64>,
    /// `heap[..heap_size]` is the live heap; the tail holds extracted maxima.
    pub heap_size: usize,
    /// Extracted values in ascending order.
    pub sorted: Vec<i64>,
    pub highlights: Vec<usize>,
    pub compared: Vec<usize>,
}

pub type HeapSortStep = Step<HeapSortEvent, HeapSortState>;

struct HeapSort<'a> {
    heap: Vec<i64>,
    heap_size: usize,
    sorted: Vec<i64>,
    rec: &'a mut Recorder<HeapSortStep>,
}

impl HeapSort<'_> {
    fn record(
        &mut self,
        event: HeapSortEvent,
        highlights: Vec<usize>,
        compared: Vec<usize>,
        message: String,
    ) {
        let state = HeapSortState {
            heap: self.heap.clone(),
            heap_size: self.heap_size,
            sorted: self.sorted.clone(),
            highlights,
            compared,
        };
        self.rec.record(event, state, message);
    }

    fn sink(&mut self, mut k: usize, n: usize) {
        while 2 * k + 1 < n {
            let mut j = 2 * k + 1;

            if j + 1 < n {
                self.record(
                    HeapSortEvent::CompareChildren {
                        parent: k,
                        left: j,
                        right: j + 1,
                    },
                    vec![k],
                    vec![j, j + 1],
                    format!(
                        "Comparing left child ({}) with right child ({}).",
                        self.heap[j],
                        self.heap[j + 1]
                    ),
                );

                if self.heap[j] < self.heap[j + 1] {
                    j += 1;
                    self.record(
                        HeapSortEvent::SelectChild {
                            parent: k,
                            child: j,
                            side: Side::Right,
                        },
                        vec![k],
                        vec![j],
                        format!(
                            "Right child ({}) is larger, so we'll compare it with the parent.",
                            self.heap[j]
                        ),
                    );
                } else {
                    self.record(
                        HeapSortEvent::SelectChild {
                            parent: k,
                            child: j,
                            side: Side::Left,
                        },
                        vec![k],
                        vec![j],
                        format!(
                            "Left child ({}) is larger or equal, so we'll compare it with the parent.",
                            self.heap[j]
                        ),
                    );
                }
            }

            self.record(
                HeapSortEvent::CompareParent {
                    parent: k,
                    child: j,
                },
                vec![k],
                vec![j],
                format!(
                    "Comparing parent ({}) with largest child ({}).",
                    self.heap[k], self.heap[j]
                ),
            );

            if self.heap[k] >= self.heap[j] {
                self.record(
                    HeapSortEvent::NoSwap {
                        parent: k,
                        child: j,
                    },
                    vec![k],
                    vec![j],
                    format!(
                        "Parent ({}) is already larger or equal to child ({}). No need to swap.",
                        self.heap[k], self.heap[j]
                    ),
                );
                break;
            }

            self.record(
                HeapSortEvent::Swap {
                    parent: k,
                    child: j,
                },
                vec![k, j],
                Vec::new(),
                format!(
                    "Parent ({}) is smaller than child ({}). Swapping them.",
                    self.heap[k], self.heap[j]
                ),
            );
            self.heap.swap(k, j);
            self.record(
                HeapSortEvent::Moved { index: j },
                vec![j],
                Vec::new(),
                format!("After swap, moving down to index {j}."),
            );

            k = j;
        }
    }

    fn run(&mut self) {
        let n = self.heap.len();

        self.record(
            HeapSortEvent::Initial,
            Vec::new(),
            Vec::new(),
            "Initial array before heap construction.".into(),
        );
        self.record(
            HeapSortEvent::Phase {
                phase: HeapPhase::Heapify,
            },
            Vec::new(),
            Vec::new(),
            "Beginning heapify phase. We will build a max heap from the bottom up.".into(),
        );
        for k in (0..n / 2).rev() {
            self.sink(k, n);
        }

        self.record(
            HeapSortEvent::Phase {
                phase: HeapPhase::SortDown,
            },
            Vec::new(),
            Vec::new(),
            "Heapify complete. Beginning sort-down phase.".into(),
        );

        let mut k = n.saturating_sub(1);
        while k > 0 {
            self.record(
                HeapSortEvent::SwapRoot { last: k },
                vec![0, k],
                Vec::new(),
                format!(
                    "Swapping root ({}) with the last element ({}).",
                    self.heap[0], self.heap[k]
                ),
            );
            self.heap.swap(0, k);

            let value = self.heap[k];
            self.heap_size = k;
            self.sorted.insert(0, value);
            self.record(
                HeapSortEvent::Extract { index: k, value },
                vec![k],
                Vec::new(),
                format!("Extracted {value} from the heap and added to the sorted array."),
            );

            self.sink(0, k);
            k -= 1;
        }

        if let Some(&last) = self.heap.first() {
            self.sorted.insert(0, last);
        }
        self.heap_size = 0;
        self.record(
            HeapSortEvent::Complete,
            Vec::new(),
            Vec::new(),
            "Heap sort complete! The array is now sorted in ascending order.".into(),
        );
    }
}

/// Sorts a copy of `values`, returning every recorded step.
///
/// On the final [`HeapSortEvent::Complete`] step both `heap` and `sorted` hold the sorted values.
pub fn trace(values: &[i64]) -> Vec<HeapSortStep> {
    let mut rec = Recorder::new();
    HeapSort {
        heap: values.to_vec(),
        heap_size: values.len(),
        sorted: Vec::new(),
        rec: &mut rec,
    }
    .run();

    adebug!(len = values.len(), steps = rec.len(), "heap_sort::trace");
    rec.into_steps()
}
