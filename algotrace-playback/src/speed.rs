/// Maps the 0–100 speed slider onto a per-step delay.
///
/// Slider `0` is the slowest setting (`max_delay_ms`), `100` the fastest (`min_delay_ms`); values
/// in between interpolate linearly, rounded to the nearest millisecond.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedCurve {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self::new(100, 2000)
    }
}

impl SpeedCurve {
    pub const SLIDER_MAX: u8 = 100;

    pub fn new(min_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            min_delay_ms: min_delay_ms.min(max_delay_ms),
            max_delay_ms: max_delay_ms.max(min_delay_ms),
        }
    }

    pub fn delay_ms(&self, slider: u8) -> u64 {
        // Widened so delays near `u64::MAX` cannot overflow; the result is at most `max`.
        let slider = u128::from(slider.min(Self::SLIDER_MAX));
        let max = u128::from(self.max_delay_ms);
        let span = max - u128::from(self.min_delay_ms);
        let delay = (max * 100 - slider * span + 50) / 100;
        u64::try_from(delay).unwrap_or(self.max_delay_ms)
    }

    /// Slider position whose delay is closest to `delay_ms`.
    pub fn slider_for(&self, delay_ms: u64) -> u8 {
        let delay = delay_ms.clamp(self.min_delay_ms, self.max_delay_ms);
        let span = self.max_delay_ms - self.min_delay_ms;
        if span == 0 {
            return Self::SLIDER_MAX;
        }
        let slider =
            (u128::from(self.max_delay_ms - delay) * 100 + u128::from(span / 2)) / u128::from(span);
        slider.min(u128::from(Self::SLIDER_MAX)) as u8
    }
}
