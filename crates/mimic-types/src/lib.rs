//! `mimic-types` – shared data model for the Mimic retargeting pipeline.
//!
//! Every stage of the pipeline (BVH reader, skeleton loader, mapper,
//! serializer, CLI driver) talks in these types, so they live in one leaf
//! crate with no dependencies on the rest of the workspace.
//!
//! # Modules
//!
//! - [`joint_map`] – [`JointMap`][joint_map::JointMap]: an
//!   insertion-ordered string-keyed map that serializes as a JSON object.
//!   Stable key ordering is part of the interchange-file contract, so the
//!   ordering is a type-level guarantee rather than a serializer option.
//! - [`motion`] – per-frame samples ([`SourceFrame`][motion::SourceFrame],
//!   [`TargetFrame`][motion::TargetFrame]) and the
//!   [`Trajectory`][motion::Trajectory] they assemble into.
//! - [`skeleton`] – the target robot's joint metadata:
//!   [`TargetJoint`][skeleton::TargetJoint],
//!   [`Mobility`][skeleton::Mobility], [`JointLimits`][skeleton::JointLimits].
//! - [`error`] – [`MimicError`][error::MimicError]: the single error
//!   taxonomy every component reports through.

pub mod error;
pub mod joint_map;
pub mod motion;
pub mod skeleton;

pub use error::MimicError;
pub use joint_map::JointMap;
pub use motion::{SourceFrame, TargetFrame, Trajectory};
pub use skeleton::{JointLimits, Mobility, TargetJoint};
