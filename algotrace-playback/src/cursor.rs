/// Where a fresh or restarted playback sits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartPosition {
    /// On step 0.
    #[default]
    First,
    /// Before step 0, showing the untouched input; the first advance lands on step 0.
    BeforeFirst,
}

/// A clamped index into a step sequence of fixed length.
///
/// `None` is the pre-initialization position. It is only reachable with
/// [`StartPosition::BeforeFirst`], or when the sequence is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cursor {
    index: Option<usize>,
    len: usize,
    start: StartPosition,
}

impl Cursor {
    pub(crate) fn new(len: usize, start: StartPosition) -> Self {
        let mut cursor = Self {
            index: None,
            len,
            start,
        };
        cursor.reset();
        cursor
    }

    pub(crate) fn index(&self) -> Option<usize> {
        self.index
    }

    fn last_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.len == 0 || self.index == self.last_index()
    }

    pub(crate) fn reset(&mut self) {
        self.index = match self.start {
            StartPosition::First if self.len > 0 => Some(0),
            _ => None,
        };
    }

    pub(crate) fn next(&mut self) {
        self.index = match (self.index, self.last_index()) {
            (_, None) => None,
            (None, Some(_)) => Some(0),
            (Some(i), Some(last)) => Some((i + 1).min(last)),
        };
    }

    pub(crate) fn prev(&mut self) {
        self.index = match (self.index, self.start) {
            (Some(0), StartPosition::BeforeFirst) => None,
            (Some(i), _) => Some(i.saturating_sub(1)),
            (None, _) => None,
        };
    }

    pub(crate) fn first(&mut self) {
        self.index = self.last_index().map(|_| 0);
    }

    pub(crate) fn last(&mut self) {
        self.index = self.last_index();
    }

    pub(crate) fn seek(&mut self, index: usize) {
        self.index = self.last_index().map(|last| index.min(last));
    }
}
