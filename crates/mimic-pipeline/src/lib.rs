//! `mimic-pipeline` – Retargeting Mapper and Trajectory Serializer.
//!
//! The core of the pipeline: turns the source frame sequence into a
//! [`Trajectory`][mimic_types::Trajectory] for the target skeleton, and
//! reads/writes the JSON interchange files.
//!
//! # Modules
//!
//! - [`policy`] – [`MappingPolicy`][policy::MappingPolicy]: the swappable
//!   per-frame mapping strategy, with
//!   [`SineSweepPolicy`][policy::SineSweepPolicy] as the reference
//!   implementation (time-driven sine signal, index-proportional per-joint
//!   scaling, joint-limit clamping).
//! - [`retarget`] – [`Retargeter`][retarget::Retargeter]: applies a policy
//!   frame by frame, passing each source timestamp through unchanged.
//! - [`serializer`] – interchange-file I/O: JSON arrays of
//!   `{ "time": n, "joints": { ... } }` records with insertion-ordered
//!   keys and 4-decimal-place rounding of the `time` field at write.

pub mod policy;
pub mod retarget;
pub mod serializer;

pub use policy::{MappingPolicy, SineSweepPolicy};
pub use retarget::Retargeter;
pub use serializer::{read_motion, read_trajectory, write_motion, write_trajectory};
