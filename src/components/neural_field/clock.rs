//! Converts display frames into simulation ticks.
//!
//! The motion constants are tuned per 60 Hz tick. In [`TickMode::Fixed`]
//! every frame is one tick, whatever the refresh rate. In
//! [`TickMode::Elapsed`] the frame timestamps are accumulated and spent in
//! whole ticks, so a 120 Hz display updates every other frame and a stalled
//! tab catches up (within [`MAX_CATCH_UP`]).

use super::types::TickMode;

/// Duration of one simulation tick in milliseconds.
pub const TICK_MS: f64 = 1000.0 / 60.0;

/// Most ticks a single frame may run; older backlog is dropped.
pub const MAX_CATCH_UP: u32 = 4;

#[derive(Clone, Debug)]
pub struct FrameClock {
	mode: TickMode,
	last_frame: Option<f64>,
	accumulator: f64,
}

impl FrameClock {
	pub fn new(mode: TickMode) -> Self {
		Self {
			mode,
			last_frame: None,
			accumulator: 0.0,
		}
	}

	/// Number of ticks to run for a frame stamped `now_ms`.
	pub fn ticks(&mut self, now_ms: f64) -> u32 {
		match self.mode {
			TickMode::Fixed => 1,
			TickMode::Elapsed => self.elapsed_ticks(now_ms),
		}
	}

	fn elapsed_ticks(&mut self, now_ms: f64) -> u32 {
		let Some(last) = self.last_frame.replace(now_ms) else {
			return 1;
		};
		// Timestamps can repeat or go backwards across tab suspension.
		self.accumulator += (now_ms - last).max(0.0);

		let due = (self.accumulator / TICK_MS).floor();
		if due >= MAX_CATCH_UP as f64 {
			self.accumulator = 0.0;
			return MAX_CATCH_UP;
		}
		self.accumulator -= due * TICK_MS;
		due as u32
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed_is_one_per_frame() {
		let mut clock = FrameClock::new(TickMode::Fixed);
		assert_eq!(clock.ticks(0.0), 1);
		assert_eq!(clock.ticks(1.0), 1);
		assert_eq!(clock.ticks(500.0), 1);
	}

	#[test]
	fn test_elapsed_first_frame_ticks_once() {
		let mut clock = FrameClock::new(TickMode::Elapsed);
		assert_eq!(clock.ticks(1234.0), 1);
	}

	#[test]
	fn test_elapsed_high_refresh_rate() {
		let mut clock = FrameClock::new(TickMode::Elapsed);
		clock.ticks(0.0);
		let frame = 1000.0 / 120.0;
		let total: u32 = (1..=120).map(|i| clock.ticks(i as f64 * frame)).sum();
		assert!((59..=60).contains(&total), "got {}", total);
	}

	#[test]
	fn test_elapsed_caps_catch_up() {
		let mut clock = FrameClock::new(TickMode::Elapsed);
		clock.ticks(0.0);
		assert_eq!(clock.ticks(10_000.0), MAX_CATCH_UP);
		// Backlog was dropped, not carried.
		assert_eq!(clock.ticks(10_000.0 + TICK_MS * 0.5), 0);
	}

	#[test]
	fn test_elapsed_ignores_backwards_time() {
		let mut clock = FrameClock::new(TickMode::Elapsed);
		clock.ticks(100.0);
		assert_eq!(clock.ticks(50.0), 0);
	}
}
