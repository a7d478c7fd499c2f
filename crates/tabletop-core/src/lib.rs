//! Core state for tabletop-rs.
//!
//! This crate provides the session-level types shared by the rest of the
//! workspace:
//! - [`EyeState`]/[`EyeConfig`] for spherical-coordinate navigation
//! - [`DisplayOptions`] for display-mode toggles
//! - [`NavEvent`] for discrete input
//! - [`SceneState`], the explicit per-session state passed into each frame

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Options structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod eye;
pub mod navigation;
pub mod options;
pub mod state;

pub use error::{Result, TabletopError};
pub use eye::{EyeConfig, EyeState};
pub use navigation::NavEvent;
pub use options::DisplayOptions;
pub use state::SceneState;

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3, Vec4};
