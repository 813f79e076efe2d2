//! Explicit frame driver for the neural field.
//!
//! The host calls [`FrameDriver::frame`] once per display frame; the driver
//! runs the due simulation ticks, renders once, and reports whether another
//! frame should be scheduled. Stopping goes through a [`StopHandle`] that can
//! be handed to teardown code on any thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;

use super::clock::{FrameClock, TICK_MS};
use super::render;
use super::state::ParticleField;
use super::surface::Surface;
use super::theme::Theme;
use super::types::TickMode;

/// Shared flag that ends an animation loop.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn stop(&self) {
		self.0.store(true, Ordering::Relaxed);
	}

	pub fn is_stopped(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}
}

/// Sequences update-then-render for each display frame.
#[derive(Debug)]
pub struct FrameDriver {
	clock: FrameClock,
	stop: StopHandle,
	frames: u64,
}

impl FrameDriver {
	pub fn new(mode: TickMode) -> Self {
		Self::with_stop(mode, StopHandle::new())
	}

	pub fn with_stop(mode: TickMode, stop: StopHandle) -> Self {
		Self {
			clock: FrameClock::new(mode),
			stop,
			frames: 0,
		}
	}

	pub fn stop_handle(&self) -> StopHandle {
		self.stop.clone()
	}

	/// Frames rendered so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Advances and renders one frame stamped `now_ms`.
	///
	/// Returns `false` once stopped; the field is left untouched in that case.
	pub fn frame<R: Rng, S: Surface + ?Sized>(
		&mut self,
		field: &mut ParticleField<R>,
		surface: &mut S,
		theme: &Theme,
		now_ms: f64,
	) -> bool {
		if self.stop.is_stopped() {
			return false;
		}
		for _ in 0..self.clock.ticks(now_ms) {
			field.update();
		}
		render::render(field, surface, theme);
		self.frames += 1;
		true
	}

	/// Drives up to `frames` frames on a synthetic 60 Hz timeline, stopping
	/// early if the loop is stopped. Returns the number of frames rendered.
	pub fn run<R: Rng, S: Surface + ?Sized>(
		&mut self,
		frames: u32,
		field: &mut ParticleField<R>,
		surface: &mut S,
		theme: &Theme,
	) -> u32 {
		let mut rendered = 0;
		for _ in 0..frames {
			let now_ms = self.frames as f64 * TICK_MS;
			if !self.frame(field, surface, theme, now_ms) {
				break;
			}
			rendered += 1;
		}
		rendered
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::neural_field::surface::{DrawCommand, RecordingSurface};
	use crate::components::neural_field::theme::NeuronPalette;
	use crate::components::neural_field::types::FieldConfig;

	fn field() -> ParticleField {
		let config = FieldConfig {
			seed: Some(8),
			..FieldConfig::default()
		};
		ParticleField::new(800.0, 600.0, config, NeuronPalette::neural())
	}

	#[test]
	fn test_fixed_run_ticks_once_per_frame() {
		let (mut field, mut surface) = (field(), RecordingSurface::new());
		let mut driver = FrameDriver::new(TickMode::Fixed);
		assert_eq!(driver.run(10, &mut field, &mut surface, &Theme::neural()), 10);
		assert_eq!(field.ticks(), 10);
		assert_eq!(driver.frames(), 10);
		let clears = surface
			.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Clear { .. }))
			.count();
		assert_eq!(clears, 10);
	}

	#[test]
	fn test_elapsed_run_matches_nominal_rate() {
		let (mut field, mut surface) = (field(), RecordingSurface::new());
		let mut driver = FrameDriver::new(TickMode::Elapsed);
		driver.run(30, &mut field, &mut surface, &Theme::neural());
		assert!((29..=30).contains(&field.ticks()), "got {}", field.ticks());
	}

	#[test]
	fn test_stop_halts_loop() {
		let (mut field, mut surface) = (field(), RecordingSurface::new());
		let mut driver = FrameDriver::new(TickMode::Fixed);
		let handle = driver.stop_handle();
		driver.run(3, &mut field, &mut surface, &Theme::neural());

		handle.stop();
		surface.reset();
		assert!(!driver.frame(&mut field, &mut surface, &Theme::neural(), 1000.0));
		assert_eq!(driver.run(5, &mut field, &mut surface, &Theme::neural()), 0);
		assert_eq!(field.ticks(), 3);
		assert!(surface.commands.is_empty());
	}
}
