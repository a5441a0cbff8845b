//! The pluggable mapping policy.
//!
//! A policy maps one source frame onto the target skeleton's actuated
//! joints.  The trait takes a single frame by contract — retargeting is a
//! pure per-frame function with no cross-frame memory; a future
//! history-aware policy (velocity limiting, smoothing) would need a wider
//! seam and is deliberately not anticipated here.

use std::f64::consts::TAU;

use mimic_types::{JointMap, MimicError, SourceFrame, TargetJoint};

/// Per-frame mapping strategy from a source frame to actuation values for
/// the target skeleton's actuated joints.
///
/// Implementations must emit exactly the actuated joints of `joints`
/// (never a fixed joint), keep the output within each joint's limits when
/// limits exist, and be deterministic.
pub trait MappingPolicy {
    /// Map one source frame onto the actuated joints of the target.
    ///
    /// # Errors
    ///
    /// [`MimicError::EmptyModel`] when `joints` contains no actuated
    /// joint.
    fn map_frame(
        &self,
        frame: &SourceFrame,
        joints: &[TargetJoint],
    ) -> Result<JointMap<f64>, MimicError>;
}

/// Reference policy: a time-driven sine signal, fanned out across the
/// actuated joints with index-proportional scaling.
///
/// `s(t) = amplitude * sin(2π t)`; the actuated joint at ordinal `k` of
/// `n` (declaration order, `k` starting at 0) receives
/// `s(t) * (k + 1) / n`, clamped into the joint's limits when it has any.
/// No two actuated joints receive the same scale factor, so ties are
/// broken by declaration order.  The source rotations are deliberately
/// ignored — this is a placeholder strategy behind the policy seam, not an
/// anatomical mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct SineSweepPolicy {
    amplitude: f64,
}

impl SineSweepPolicy {
    /// Default drive amplitude in radians.  A configuration value, not a
    /// biomechanical constant.
    pub const DEFAULT_AMPLITUDE: f64 = 0.5;

    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl Default for SineSweepPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_AMPLITUDE)
    }
}

impl MappingPolicy for SineSweepPolicy {
    fn map_frame(
        &self,
        frame: &SourceFrame,
        joints: &[TargetJoint],
    ) -> Result<JointMap<f64>, MimicError> {
        let actuated: Vec<&TargetJoint> = joints.iter().filter(|j| j.is_actuated()).collect();
        let n = actuated.len();
        if n == 0 {
            return Err(MimicError::EmptyModel);
        }

        let drive = self.amplitude * (TAU * frame.time).sin();
        let mut actuations = JointMap::with_capacity(n);
        for (k, joint) in actuated.iter().enumerate() {
            let mut value = drive * (k + 1) as f64 / n as f64;
            if let Some(limits) = &joint.limits {
                value = limits.clamp(value);
            }
            actuations.insert(joint.name.clone(), value);
        }
        Ok(actuations)
    }
}
