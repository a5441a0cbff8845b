//! Pipeline stage commands.
//!
//! Each command is a straight-line composition of the library crates.
//! Errors propagate untouched to the driver in `main.rs` — these functions
//! never catch, retry, or log-and-continue.

use std::path::Path;

use colored::Colorize;
use tracing::info;

use mimic_model::{KinematicEngine, load_model, resolve_model_path};
use mimic_pipeline::{Retargeter, SineSweepPolicy, read_motion, write_motion, write_trajectory};
use mimic_types::MimicError;

use crate::config::Config;

/// `mimic extract` – BVH recording → intermediate motion file.
pub fn extract(input: &Path, output: &Path) -> Result<(), MimicError> {
    let capture = mimic_bvh::read_file(input)?;
    println!(
        "  Parsed {} ({} joints, {} frames @ {}s)",
        input.display().to_string().bold(),
        capture.joint_names.len(),
        capture.frames.len(),
        capture.frame_time
    );

    write_motion(output, &capture.frames)?;
    println!(
        "  {} Motion written to {}",
        "✓".green().bold(),
        output.display().to_string().bold()
    );
    Ok(())
}

/// `mimic retarget` – intermediate motion file + robot model → trajectory.
///
/// The kinematic engine handle is scoped to this function: it is acquired
/// before the model is touched and released when the function returns,
/// on the error paths included.
pub fn retarget(model: &Path, input: &Path, output: &Path, cfg: &Config) -> Result<(), MimicError> {
    let engine = KinematicEngine::connect()?;

    let resolved = resolve_model_path(model, cfg.model_dir.as_deref())?;
    println!("  Loading model: {}", resolved.display().to_string().bold());
    let robot = load_model(&engine, &resolved)?;

    let frames = read_motion(input)?;
    if frames.is_empty() {
        // An empty trajectory file would be operationally useless.
        return Err(MimicError::FrameCountMismatch);
    }
    info!(frames = frames.len(), model = %robot.name, "retargeting");

    let retargeter = Retargeter::new(SineSweepPolicy::new(cfg.amplitude));
    let trajectory = retargeter.retarget(&frames, &robot.joints)?;
    write_trajectory(output, &trajectory)?;

    println!(
        "  {} Retargeted {} frames onto {} actuated joints -> {}",
        "✓".green().bold(),
        trajectory.len(),
        robot.num_actuated,
        output.display().to_string().bold()
    );
    Ok(())
}

/// `mimic run` – both stages in one process, through the intermediate
/// motion file.
pub fn run(
    input: &Path,
    model: &Path,
    poses: &Path,
    output: &Path,
    cfg: &Config,
) -> Result<(), MimicError> {
    extract(input, poses)?;
    retarget(model, poses, output, cfg)
}
