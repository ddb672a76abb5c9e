use core::fmt;

/// Identity of a graph node.
///
/// Node ids key the ordered maps carried in graph snapshots, and appear in step messages.
pub trait NodeKey: Ord + Clone + fmt::Debug + fmt::Display {}
impl<T: Ord + Clone + fmt::Debug + fmt::Display> NodeKey for T {}
