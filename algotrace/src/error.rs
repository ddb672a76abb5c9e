use alloc::string::String;

/// Rejected engine input.
///
/// These are validation gates: an engine is never invoked with input that fails them, and no
/// step is recorded for a rejected request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("please enter at least one value")]
    Empty,
    #[error("`{token}` is not a valid integer")]
    NotANumber { token: String },
    #[error("a key is required")]
    MissingKey,
    #[error("node `{node}` is not part of the graph")]
    UnknownNode { node: String },
    #[error("edge {from}-{to} must have a positive weight")]
    NonPositiveWeight { from: String, to: String },
    #[error("element {element} is out of range for {len} elements")]
    ElementOutOfRange { element: usize, len: usize },
    #[error("board size {size} is outside {min}..={max}")]
    BoardSize { size: usize, min: usize, max: usize },
}
