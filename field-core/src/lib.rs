//! Core attractor dot-field simulation library.
//!
//! Main components:
//! - [`attractor`] - moving attractor points and their seeding.
//! - [`phases`] - per-frame update, field sampling and drawing phases.
//! - [`simulation`] - the owned simulation driven by a host each frame.
//! - [`field_buffer`] - grid geometry and the per-frame intensity buffer.
//! - [`canvas`] - the drawing surface hosts implement.
//! - [`color`] - RGB colors and the fixed palette.
//! - [`config`] - every constant of the animation.
//! - [`error`] - setup-time errors.
//! - [`types`] - shared viewport type.

pub mod attractor;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod field_buffer;
pub mod phases;
pub mod simulation;
pub mod types;
