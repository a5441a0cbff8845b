//! [`Retargeter`] – drives a [`MappingPolicy`] over a frame sequence.

use tracing::debug;

use mimic_types::{MimicError, SourceFrame, TargetFrame, TargetJoint, Trajectory};

use crate::policy::MappingPolicy;

/// Applies a mapping policy to every source frame, producing one
/// [`TargetFrame`] per [`SourceFrame`] with the timestamp passed through
/// unchanged.
pub struct Retargeter<P: MappingPolicy> {
    policy: P,
}

impl<P: MappingPolicy> Retargeter<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Retarget `frames` onto the target skeleton described by `joints`.
    ///
    /// An empty input yields an empty trajectory, not an error; callers
    /// that require a non-empty result (the CLI driver does) check for
    /// that case themselves.
    ///
    /// # Errors
    ///
    /// Whatever the policy reports — [`MimicError::EmptyModel`] for a
    /// skeleton with no actuated joints, at the first frame.
    pub fn retarget(
        &self,
        frames: &[SourceFrame],
        joints: &[TargetJoint],
    ) -> Result<Trajectory, MimicError> {
        let mut trajectory = Trajectory::new();
        for frame in frames {
            let actuations = self.policy.map_frame(frame, joints)?;
            trajectory.push(TargetFrame {
                time: frame.time,
                actuations,
            });
        }
        debug!(frames = trajectory.len(), "retargeting complete");
        Ok(trajectory)
    }
}
