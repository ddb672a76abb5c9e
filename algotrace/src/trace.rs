use alloc::string::String;
use alloc::vec::Vec;

/// Tag naming the kind of transition a step records (`"swap"`, `"rotate-left"`, ...).
pub trait StepKind {
    fn tag(&self) -> &'static str;
}

/// Read-only view shared by every step type, used by playback and logging.
pub trait TraceStep {
    fn kind(&self) -> &'static str;
    fn message(&self) -> &str;
}

/// One immutable entry of a trace.
///
/// - `event` is the engine's tagged transition, carrying the indices/keys/edges to highlight.
/// - `state` is an owned snapshot of the algorithm state right after the transition.
/// - `message` is a human-readable explanation derived from the operands.
///
/// A step never shares data with the live structure it was taken from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step<E, S> {
    pub event: E,
    pub state: S,
    pub message: String,
}

impl<E: StepKind, S> TraceStep for Step<E, S> {
    fn kind(&self) -> &'static str {
        self.event.tag()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Caller-owned trace accumulator.
///
/// Engines append to a recorder passed by reference instead of keeping a hidden step buffer.
/// Eager engines create one per run; persistent structures keep one as their history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorder<S> {
    steps: Vec<S>,
}

impl<S> Default for Recorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Recorder<S> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn push(&mut self, step: S) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<E: StepKind, S> Recorder<Step<E, S>> {
    /// Appends a step built from its parts.
    pub fn record(&mut self, event: E, state: S, message: String) {
        atrace!(
            index = self.steps.len(),
            kind = event.tag(),
            "Recorder::record"
        );
        self.steps.push(Step {
            event,
            state,
            message,
        });
    }
}

/// Formats `items` as `a, b, c` for step messages.
pub(crate) fn join<T: core::fmt::Display>(items: &[T]) -> String {
    use core::fmt::Write;

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{item}");
    }
    out
}
