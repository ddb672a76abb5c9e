use alloc::vec::Vec;

use algotrace::TraceStep;

use crate::cursor::Cursor;
use crate::{SpeedCurve, StartPosition};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackState {
    /// Fresh or restarted; nothing has been played yet.
    #[default]
    Idle,
    Playing,
    Paused,
}

/// Manual navigation requested by a control button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    First,
    Prev,
    Next,
    Last,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerOptions {
    pub start: StartPosition,
    pub speed: SpeedCurve,
    /// Initial slider position, `0..=100`.
    pub speed_slider: u8,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            start: StartPosition::First,
            speed: SpeedCurve::default(),
            speed_slider: 75,
        }
    }
}

impl PlayerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: StartPosition) -> Self {
        self.start = start;
        self
    }

    pub fn with_speed(mut self, speed: SpeedCurve) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_speed_slider(mut self, slider: u8) -> Self {
        self.speed_slider = slider.min(SpeedCurve::SLIDER_MAX);
        self
    }
}

/// A framework-neutral step sequencer over a recorded trace.
///
/// This type does not own a timer. Adapters drive it by calling:
/// - the navigation methods (`next`, `prev`, `first`, `last`, `seek`, `restart`) on user input
/// - `play` / `pause` / `toggle_play` for auto-play
/// - `tick(now_ms)` from their event loop or a repeating timer
///
/// At most one deadline is pending at a time. Changing the playing state, the position or the
/// speed drops it, and the next `tick` while playing arms a fresh one `animation_speed_ms()`
/// later. A tick at or past the deadline advances by one step; once the last step is showing,
/// the next due tick pauses playback instead.
#[derive(Clone, Debug)]
pub struct Player<S> {
    steps: Vec<S>,
    cursor: Cursor,
    state: PlaybackState,
    options: PlayerOptions,
    deadline_ms: Option<u64>,
}

impl<S> Player<S> {
    pub fn new(steps: Vec<S>, options: PlayerOptions) -> Self {
        let options = options.with_speed_slider(options.speed_slider);
        Self {
            cursor: Cursor::new(steps.len(), options.start),
            steps,
            state: PlaybackState::Idle,
            options,
            deadline_ms: None,
        }
    }

    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Index of the step being shown; `None` before the first step.
    pub fn position(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn current_step(&self) -> Option<&S> {
        self.position().and_then(|i| self.steps.get(i))
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// The pending auto-advance deadline, if one is armed.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn speed_slider(&self) -> u8 {
        self.options.speed_slider
    }

    pub fn animation_speed_ms(&self) -> u64 {
        self.options.speed.delay_ms(self.options.speed_slider)
    }

    pub fn set_speed_slider(&mut self, slider: u8) {
        let slider = slider.min(SpeedCurve::SLIDER_MAX);
        if slider != self.options.speed_slider {
            self.options.speed_slider = slider;
            self.cancel_deadline();
        }
    }

    /// Swaps in a freshly generated trace, returning to the start position and `Idle`.
    pub fn replace_steps(&mut self, steps: Vec<S>) -> Vec<S> {
        self.cursor = Cursor::new(steps.len(), self.options.start);
        self.state = PlaybackState::Idle;
        self.cancel_deadline();
        pdebug!(len = steps.len(), "Player::replace_steps");
        core::mem::replace(&mut self.steps, steps)
    }

    /// Starts auto-play. Does nothing when already on the last step.
    pub fn play(&mut self) {
        if self.is_playing() || self.cursor.is_at_end() {
            return;
        }
        self.state = PlaybackState::Playing;
        self.cancel_deadline();
        pdebug!(position = ?self.position(), "Player::play");
    }

    pub fn pause(&mut self) {
        if self.is_playing() {
            self.state = PlaybackState::Paused;
            self.cancel_deadline();
            pdebug!(position = ?self.position(), "Player::pause");
        }
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn next(&mut self) {
        self.navigate(Cursor::next);
    }

    pub fn prev(&mut self) {
        self.navigate(Cursor::prev);
    }

    pub fn first(&mut self) {
        self.navigate(Cursor::first);
    }

    pub fn last(&mut self) {
        self.navigate(Cursor::last);
    }

    /// Jumps to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) {
        self.navigate(|c| c.seek(index));
    }

    pub fn handle_step(&mut self, direction: Direction) {
        match direction {
            Direction::First => self.first(),
            Direction::Prev => self.prev(),
            Direction::Next => self.next(),
            Direction::Last => self.last(),
        }
    }

    /// Back to the start position, not playing.
    pub fn restart(&mut self) {
        self.cursor.reset();
        self.state = PlaybackState::Idle;
        self.cancel_deadline();
    }

    /// Advances auto-play. Returns the new position when a step was taken.
    pub fn tick(&mut self, now_ms: u64) -> Option<usize> {
        if !self.is_playing() {
            return None;
        }

        let Some(deadline) = self.deadline_ms else {
            self.deadline_ms = Some(now_ms.saturating_add(self.animation_speed_ms()));
            return None;
        };
        if now_ms < deadline {
            return None;
        }

        if self.cursor.is_at_end() {
            self.state = PlaybackState::Paused;
            self.cancel_deadline();
            pdebug!(position = ?self.position(), "Player::tick reached the end");
            return None;
        }

        self.cursor.next();
        self.deadline_ms = Some(now_ms.saturating_add(self.animation_speed_ms()));
        ptrace!(position = ?self.position(), now_ms, "Player::tick");
        self.position()
    }

    fn navigate(&mut self, f: impl FnOnce(&mut Cursor)) {
        let before = self.cursor.index();
        f(&mut self.cursor);
        if self.cursor.index() != before {
            self.cancel_deadline();
        }
    }

    fn cancel_deadline(&mut self) {
        self.deadline_ms = None;
    }
}

impl<S: TraceStep> Player<S> {
    /// Message of the step being shown.
    pub fn current_message(&self) -> Option<&str> {
        self.current_step().map(TraceStep::message)
    }

    /// Tag of the step being shown.
    pub fn current_kind(&self) -> Option<&'static str> {
        self.current_step().map(TraceStep::kind)
    }
}
