//! Target-robot joint metadata.
//!
//! The skeleton loader classifies every joint of the robot model exactly
//! once, up front, into this immutable description; the mapper only ever
//! reads it.  Joint mobility is a two-way split: a joint either has a
//! controllable degree of freedom ([`Mobility::Actuated`]) or is a rigid
//! structural connection ([`Mobility::Fixed`]).

use serde::{Deserialize, Serialize};

/// Whether a target joint can be driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mobility {
    Actuated,
    Fixed,
}

/// Valid actuation range of a joint, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointLimits {
    pub lower: f64,
    pub upper: f64,
}

impl JointLimits {
    /// Build limits, rejecting empty or non-finite ranges.
    ///
    /// Robot model formats commonly encode "no limit" as `lower == upper
    /// == 0.0` (e.g. a continuous joint), which comes back as `None` here.
    pub fn new(lower: f64, upper: f64) -> Option<Self> {
        if lower.is_finite() && upper.is_finite() && lower < upper {
            Some(Self { lower, upper })
        } else {
            None
        }
    }

    /// Clamp `value` into `[lower, upper]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }
}

/// One joint of the target robot, as loaded from the model description.
///
/// `index` is the joint's position in the model's declaration order and
/// breaks ties wherever a deterministic ordering is needed.  `limits` is
/// only ever populated for actuated joints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetJoint {
    pub name: String,
    pub index: usize,
    pub mobility: Mobility,
    pub limits: Option<JointLimits>,
}

impl TargetJoint {
    /// Build an actuated joint.
    pub fn actuated(name: impl Into<String>, index: usize, limits: Option<JointLimits>) -> Self {
        Self {
            name: name.into(),
            index,
            mobility: Mobility::Actuated,
            limits,
        }
    }

    /// Build a fixed (structural) joint.  Fixed joints carry no limits.
    pub fn fixed(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            mobility: Mobility::Fixed,
            limits: None,
        }
    }

    pub fn is_actuated(&self) -> bool {
        self.mobility == Mobility::Actuated
    }
}
