use core::ops::RangeInclusive;

/// Visualization caps applied by the input gate before an engine runs.
///
/// Oversized arrays are truncated to the cap rather than rejected; board sizes outside
/// `queens_board` are rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceLimits {
    pub quick_sort_len: usize,
    pub merge_sort_len: usize,
    pub heap_sort_len: usize,
    pub union_find_elements: usize,
    pub queens_board: RangeInclusive<usize>,
}

impl Default for TraceLimits {
    fn default() -> Self {
        Self {
            quick_sort_len: 20,
            merge_sort_len: 8,
            heap_sort_len: 15,
            union_find_elements: 20,
            queens_board: 4..=12,
        }
    }
}

impl TraceLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quick_sort_len(mut self, len: usize) -> Self {
        self.quick_sort_len = len;
        self
    }

    pub fn with_merge_sort_len(mut self, len: usize) -> Self {
        self.merge_sort_len = len;
        self
    }

    pub fn with_heap_sort_len(mut self, len: usize) -> Self {
        self.heap_sort_len = len;
        self
    }

    pub fn with_union_find_elements(mut self, elements: usize) -> Self {
        self.union_find_elements = elements;
        self
    }

    pub fn with_queens_board(mut self, sizes: RangeInclusive<usize>) -> Self {
        self.queens_board = sizes;
        self
    }
}
