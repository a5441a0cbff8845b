//! Per-frame motion samples and the trajectory they assemble into.
//!
//! Both frame types serialize to the interchange-file record shape
//! `{ "time": <seconds>, "joints": { <name>: <value> } }`, with the
//! `joints` keys in joint-declaration order (see
//! [`JointMap`][crate::joint_map::JointMap]).

use serde::{Deserialize, Serialize};

use crate::joint_map::JointMap;

/// One sampled instant of the source (mocap) recording.
///
/// `rotations` maps each source joint name to its local rotation triple in
/// degrees, in skeleton declaration order.  Rotation components are kept
/// at full precision; rounding happens only at the serialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFrame {
    pub time: f64,
    #[serde(rename = "joints")]
    pub rotations: JointMap<[f64; 3]>,
}

/// One instant of the retargeted robot motion.
///
/// `actuations` holds exactly the actuated joints of the target skeleton —
/// fixed joints are never present, not even zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetFrame {
    pub time: f64,
    #[serde(rename = "joints")]
    pub actuations: JointMap<f64>,
}

/// Ordered sequence of [`TargetFrame`]s with strictly increasing
/// timestamps — the sole durable artifact the pipeline produces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    pub frames: Vec<TargetFrame>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: TargetFrame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TargetFrame> {
        self.frames.iter()
    }
}
