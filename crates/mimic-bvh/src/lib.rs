//! `mimic-bvh` – Motion Source Reader.
//!
//! Parses a BVH (Biovision Hierarchy) motion-capture recording into the
//! pipeline's source representation: an ordered list of joint names, one
//! [`SourceFrame`][mimic_types::SourceFrame] per sampled instant, and the
//! recording's fixed frame time.
//!
//! # Modules
//!
//! - [`parser`] – [`parse`][parser::parse]: pure text → [`MotionCapture`]
//!   transform, with [`read_file`] as the file-boundary wrapper that maps
//!   missing/unreadable inputs into the error taxonomy.

pub mod parser;

pub use parser::{MotionCapture, parse};

use std::fs;
use std::path::Path;

use tracing::info;

use mimic_types::MimicError;

/// Read and parse a BVH recording from `path`.
///
/// # Errors
///
/// [`MimicError::NotFound`] when the file is missing,
/// [`MimicError::Permission`] when it exists but is unreadable, and
/// whatever [`parse`] reports for structurally invalid content.
pub fn read_file(path: &Path) -> Result<MotionCapture, MimicError> {
    let raw = fs::read_to_string(path).map_err(|e| MimicError::from_read(path, e))?;
    let capture = parse(&raw)?;
    info!(
        path = %path.display(),
        joints = capture.joint_names.len(),
        frames = capture.frames.len(),
        frame_time = capture.frame_time,
        "parsed motion recording"
    );
    Ok(capture)
}
