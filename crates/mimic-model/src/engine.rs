//! [`KinematicEngine`] – scoped handle to the kinematics backend.
//!
//! The backend admits a single live connection per process; a handle that
//! leaks would block every later run in the same process from connecting.
//! The handle is therefore an owned value: [`KinematicEngine::connect`]
//! claims the process-wide slot, `Drop` releases it, and the loader takes
//! the handle by reference so a model can only be loaded while the
//! connection is live.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use mimic_types::MimicError;

static CONNECTED: AtomicBool = AtomicBool::new(false);

/// Live connection to the kinematics backend.
///
/// Non-reentrant: at most one handle exists per process at a time.
#[derive(Debug)]
pub struct KinematicEngine {
    _private: (),
}

impl KinematicEngine {
    /// Claim the process-wide engine slot.
    ///
    /// # Errors
    ///
    /// [`MimicError::ModelLoad`] when another handle is still live in this
    /// process.
    pub fn connect() -> Result<Self, MimicError> {
        if CONNECTED.swap(true, Ordering::SeqCst) {
            return Err(MimicError::ModelLoad(
                "kinematic engine is already connected in this process".to_string(),
            ));
        }
        debug!("kinematic engine connected");
        Ok(Self { _private: () })
    }

    /// Whether a handle is currently live in this process.
    pub fn is_connected() -> bool {
        CONNECTED.load(Ordering::SeqCst)
    }
}

impl Drop for KinematicEngine {
    fn drop(&mut self) {
        CONNECTED.store(false, Ordering::SeqCst);
        debug!("kinematic engine disconnected");
    }
}
