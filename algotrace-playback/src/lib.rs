//! Playback for traces recorded by the `algotrace` crate.
//!
//! A [`Player`] owns one recorded step sequence and a position in it. It is UI-agnostic: it holds
//! no timer and renders nothing. Adapters forward control-button presses to it and call
//! [`Player::tick`] from their event loop, then render [`Player::current_step`].
//!
//! ```
//! use algotrace_playback::{Player, PlayerOptions};
//!
//! let steps = algotrace::n_queens::trace(4);
//! let mut player = Player::new(steps, PlayerOptions::new().with_speed_slider(100));
//! player.play();
//! let mut now = 0;
//! while player.is_playing() {
//!     player.tick(now);
//!     now += 50;
//! }
//! assert!(player.is_at_end());
//! assert_eq!(player.current_kind(), Some("solution-found"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod cursor;
mod speed;


pub use controller::{Direction, PlaybackState, Player, PlayerOptions};
pub use cursor::StartPosition;
pub use speed::SpeedCurve;
