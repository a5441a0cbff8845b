//! Interchange-file serialization.
//!
//! Both interchange files are JSON arrays of
//! `{ "time": <seconds>, "joints": { ... } }` records with 4-space
//! indentation and the `joints` keys in declaration order.  The `time`
//! field — and only the `time` field — is rounded to 4 decimal places at
//! write, so writing, reading back, and writing again produces identical
//! bytes.  Each write fully encodes in memory before touching the file, so
//! a failed run never leaves a partial output behind.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use mimic_types::{MimicError, SourceFrame, Trajectory};

/// Round a timestamp to 4 decimal places (the serialization-boundary
/// rounding rule; values are never rounded).
fn round_time(time: f64) -> f64 {
    (time * 10_000.0).round() / 10_000.0
}

fn to_pretty_json<T: Serialize>(value: &T, path: &Path) -> Result<Vec<u8>, MimicError> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| MimicError::io(path, std::io::Error::other(e)))?;
    Ok(buf)
}

/// Write the intermediate motion file: one record per source frame, with
/// each joint's rotation triple under its name.
///
/// # Errors
///
/// [`MimicError::Io`] when the destination cannot be written.
pub fn write_motion(path: &Path, frames: &[SourceFrame]) -> Result<(), MimicError> {
    let rounded: Vec<SourceFrame> = frames
        .iter()
        .map(|f| SourceFrame {
            time: round_time(f.time),
            rotations: f.rotations.clone(),
        })
        .collect();
    let body = to_pretty_json(&rounded, path)?;
    fs::write(path, body).map_err(|e| MimicError::io(path, e))?;
    info!(path = %path.display(), frames = frames.len(), "wrote motion file");
    Ok(())
}

/// Read an intermediate motion file back into source frames.
///
/// # Errors
///
/// Boundary errors per [`MimicError::from_read`];
/// [`MimicError::MalformedSource`] when the JSON does not parse, when the
/// frames do not all name the same joints in the same order, or when
/// timestamps are not strictly increasing.
pub fn read_motion(path: &Path) -> Result<Vec<SourceFrame>, MimicError> {
    let raw = fs::read_to_string(path).map_err(|e| MimicError::from_read(path, e))?;
    let frames: Vec<SourceFrame> = serde_json::from_str(&raw)
        .map_err(|e| MimicError::MalformedSource(format!("{}: {}", path.display(), e)))?;

    validate_timestamps(path, frames.iter().map(|f| f.time))?;
    if let Some(first) = frames.first() {
        let names: Vec<&str> = first.rotations.names().collect();
        for (i, frame) in frames.iter().enumerate().skip(1) {
            let frame_names: Vec<&str> = frame.rotations.names().collect();
            if frame_names != names {
                return Err(MimicError::MalformedSource(format!(
                    "{}: frame {} names different joints than frame 0",
                    path.display(),
                    i
                )));
            }
        }
    }
    Ok(frames)
}

/// Write the retargeted trajectory: one record per target frame, actuated
/// joints only.
///
/// # Errors
///
/// [`MimicError::Io`] when the destination cannot be written.
pub fn write_trajectory(path: &Path, trajectory: &Trajectory) -> Result<(), MimicError> {
    let rounded = Trajectory {
        frames: trajectory
            .iter()
            .map(|f| mimic_types::TargetFrame {
                time: round_time(f.time),
                actuations: f.actuations.clone(),
            })
            .collect(),
    };
    let body = to_pretty_json(&rounded, path)?;
    fs::write(path, body).map_err(|e| MimicError::io(path, e))?;
    info!(path = %path.display(), frames = trajectory.len(), "wrote trajectory file");
    Ok(())
}

/// Read a trajectory file back.
///
/// # Errors
///
/// Boundary errors per [`MimicError::from_read`];
/// [`MimicError::MalformedSource`] on unparseable JSON or non-increasing
/// timestamps.
pub fn read_trajectory(path: &Path) -> Result<Trajectory, MimicError> {
    let raw = fs::read_to_string(path).map_err(|e| MimicError::from_read(path, e))?;
    let trajectory: Trajectory = serde_json::from_str(&raw)
        .map_err(|e| MimicError::MalformedSource(format!("{}: {}", path.display(), e)))?;
    validate_timestamps(path, trajectory.iter().map(|f| f.time))?;
    Ok(trajectory)
}

fn validate_timestamps(
    path: &Path,
    times: impl Iterator<Item = f64>,
) -> Result<(), MimicError> {
    let mut previous: Option<f64> = None;
    for (i, time) in times.enumerate() {
        if let Some(prev) = previous
            && time <= prev
        {
            return Err(MimicError::MalformedSource(format!(
                "{}: timestamp at frame {} ({}) does not increase over {}",
                path.display(),
                i,
                time,
                prev
            )));
        }
        previous = Some(time);
    }
    Ok(())
}
