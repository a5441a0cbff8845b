//! `mimic-model` – Target Skeleton Loader.
//!
//! Loads the target robot's articulated-body description (URDF) into the
//! ordered, immutable joint list the mapper consumes, and owns the scoped
//! handle to the kinematics backend.
//!
//! # Modules
//!
//! - [`engine`] – [`KinematicEngine`][engine::KinematicEngine]: the
//!   process-wide, non-reentrant backend handle.  Acquired once per run,
//!   released on `Drop` — including every error path.
//! - [`resolve`] – [`resolve_model_path`][resolve::resolve_model_path]:
//!   multi-location model lookup (given path, executable directory,
//!   configured search directory, `~/Downloads`).
//! - [`loader`] – [`load_model`][loader::load_model]: URDF →
//!   [`RobotModel`][loader::RobotModel] with one up-front mobility
//!   classification pass.

pub mod engine;
pub mod loader;
pub mod resolve;

pub use engine::KinematicEngine;
pub use loader::{RobotModel, load_model};
pub use resolve::resolve_model_path;
