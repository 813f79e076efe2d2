//! Animated neuron/synapse particle field.
//!
//! Renders a drifting population of glowing neurons on an HTML canvas with:
//! - Area-proportional seeding, capped population
//! - Sinusoidal opacity pulse per neuron
//! - Local pointer attraction with a brightness boost
//! - Synapse lines between nearby neurons, fading with distance
//!
//! The simulation and renderer are plain Rust; the browser is only touched by
//! [`NeuralFieldCanvas`] and the [`Surface`] implementation for the 2D canvas
//! context, so the field can be driven headlessly through
//! [`RecordingSurface`].
//!
//! # Example
//!
//! ```ignore
//! use neural_hero::{FieldConfig, NeuralFieldCanvas};
//!
//! let config = FieldConfig { seed: Some(7), ..FieldConfig::default() };
//!
//! view! { <NeuralFieldCanvas config=config.into() /> }
//! ```

pub mod clock;
mod component;
pub mod driver;
mod particles;
pub mod render;
mod state;
pub mod surface;
pub mod theme;
mod types;

pub use component::NeuralFieldCanvas;
pub use driver::{FrameDriver, StopHandle};
pub use particles::Particle;
pub use state::ParticleField;
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use theme::Theme;
pub use types::{FieldConfig, Pointer, TickMode};
