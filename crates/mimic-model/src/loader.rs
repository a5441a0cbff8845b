//! URDF → [`RobotModel`] loading.
//!
//! The model description is parsed with `urdf-rs`; this module's job is
//! the classification pass that turns the parsed joint list into the
//! immutable [`TargetJoint`] ordering the mapper consumes.  Classification
//! happens exactly once, at load time — the mapper never asks the backend
//! about joint types again.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use mimic_types::{JointLimits, MimicError, Mobility, TargetJoint};

use crate::engine::KinematicEngine;

/// The loaded target skeleton: joints in model declaration order plus the
/// actuated-joint count the mapper scales by.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotModel {
    pub name: String,
    pub joints: Vec<TargetJoint>,
    pub num_actuated: usize,
}

impl RobotModel {
    /// Iterate the actuated joints in declaration order.
    pub fn actuated(&self) -> impl Iterator<Item = &TargetJoint> {
        self.joints.iter().filter(|j| j.is_actuated())
    }
}

/// Load and classify the robot model at `path`.
///
/// Takes the engine handle by reference: a model can only be loaded while
/// the backend connection is live.
///
/// # Errors
///
/// [`MimicError::NotFound`] / [`MimicError::Permission`] at the file
/// boundary, [`MimicError::ModelLoad`] when the description does not parse
/// (the message carries existence and size diagnostics for the operator)
/// or declares zero joints.
pub fn load_model(_engine: &KinematicEngine, path: &Path) -> Result<RobotModel, MimicError> {
    let raw = fs::read_to_string(path).map_err(|e| MimicError::from_read(path, e))?;

    let robot = urdf_rs::read_from_string(&raw).map_err(|e| {
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        MimicError::ModelLoad(format!(
            "failed to parse {}: {} (exists: {}, size: {} bytes)",
            path.display(),
            e,
            path.exists(),
            size
        ))
    })?;

    if robot.joints.is_empty() {
        return Err(MimicError::ModelLoad(format!(
            "{}: model declares zero joints",
            path.display()
        )));
    }

    let mut joints = Vec::with_capacity(robot.joints.len());
    for (index, joint) in robot.joints.iter().enumerate() {
        // Only "fixed" is structural; every other joint type (revolute,
        // continuous, prismatic, floating, planar, ...) counts as one
        // actuated channel.
        let mobility = match joint.joint_type {
            urdf_rs::JointType::Fixed => Mobility::Fixed,
            _ => Mobility::Actuated,
        };
        let limits = match mobility {
            Mobility::Fixed => None,
            // A continuous joint's <limit> comes back as lower == upper
            // == 0.0, which JointLimits::new rejects as "no limit".
            Mobility::Actuated => JointLimits::new(joint.limit.lower, joint.limit.upper),
        };
        debug!(
            joint = %joint.name,
            joint_type = ?joint.joint_type,
            ?mobility,
            "classified model joint"
        );
        joints.push(TargetJoint {
            name: joint.name.clone(),
            index,
            mobility,
            limits,
        });
    }

    let num_actuated = joints.iter().filter(|j| j.is_actuated()).count();
    info!(
        model = %robot.name,
        joints = joints.len(),
        actuated = num_actuated,
        "loaded robot model"
    );
    Ok(RobotModel {
        name: robot.name,
        joints,
        num_actuated,
    })
}
