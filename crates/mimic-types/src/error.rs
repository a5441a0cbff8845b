//! [`MimicError`] – the pipeline's single error taxonomy.
//!
//! Every component returns this enum unmodified; the CLI driver is the only
//! place that catches broadly.  No variant is ever retried — all failures
//! are terminal for the run.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure classes of the retargeting pipeline.
#[derive(Error, Debug)]
pub enum MimicError {
    /// An input or model resource was missing at every searched location.
    #[error("resource not found; searched:\n{}", render_searched(.searched))]
    NotFound { searched: Vec<PathBuf> },

    /// The resource exists but is not readable by this process.
    #[error("no read permission for {0}")]
    Permission(PathBuf),

    /// The motion recording (or an interchange file) is structurally
    /// invalid.
    #[error("malformed motion source: {0}")]
    MalformedSource(String),

    /// The robot model description is unreadable, invalid, or empty, or
    /// the kinematic engine could not be acquired.
    #[error("model load failed: {0}")]
    ModelLoad(String),

    /// The target model has zero actuated joints, so there is nothing to
    /// drive (and the per-joint scaling would divide by zero).
    #[error("target model has no actuated joints")]
    EmptyModel,

    /// The source provided zero frames where a non-empty trajectory was
    /// required.
    #[error("source recording has no frames to retarget")]
    FrameCountMismatch,

    /// An output destination could not be written, or some other raw I/O
    /// failure outside the classes above.
    #[error("i/o failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MimicError {
    /// Map a read failure on `path` into the taxonomy: missing file →
    /// [`MimicError::NotFound`], EACCES → [`MimicError::Permission`],
    /// anything else → [`MimicError::Io`].
    pub fn from_read(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => MimicError::NotFound {
                searched: vec![path.to_path_buf()],
            },
            std::io::ErrorKind::PermissionDenied => MimicError::Permission(path.to_path_buf()),
            _ => MimicError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Wrap a raw I/O failure on `path`.
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        MimicError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }

    /// Stable machine-readable tag for the failure class, used in
    /// structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            MimicError::NotFound { .. } => "not-found",
            MimicError::Permission(_) => "permission",
            MimicError::MalformedSource(_) => "malformed-source",
            MimicError::ModelLoad(_) => "model-load",
            MimicError::EmptyModel => "empty-model",
            MimicError::FrameCountMismatch => "frame-count-mismatch",
            MimicError::Io { .. } => "io",
        }
    }
}

fn render_searched(searched: &[PathBuf]) -> String {
    searched
        .iter()
        .map(|p| format!("- {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
