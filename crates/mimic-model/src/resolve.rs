//! Model-path resolution.
//!
//! Operators routinely pass a bare model filename (`anymal.urdf`) and keep
//! the actual file next to the binary or in their download directory.  The
//! resolver tries a fixed list of locations in order and reports every one
//! of them when none matches.

use std::path::{Path, PathBuf};

use tracing::debug;

use mimic_types::MimicError;

/// Resolve a model path by searching, in order: the path as given, the
/// running executable's directory, `extra_dir` (when configured), and
/// `$HOME/Downloads`.  The first existing match wins.
///
/// # Errors
///
/// [`MimicError::NotFound`] listing every searched location when no
/// candidate exists.
pub fn resolve_model_path(given: &Path, extra_dir: Option<&Path>) -> Result<PathBuf, MimicError> {
    let mut candidates = vec![given.to_path_buf()];
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(given));
    }
    if let Some(dir) = extra_dir {
        candidates.push(dir.join(given));
    }
    if let Some(home) = home_dir() {
        candidates.push(home.join("Downloads").join(given));
    }
    resolve_from(&candidates)
}

/// Pick the first existing candidate.
pub(crate) fn resolve_from(candidates: &[PathBuf]) -> Result<PathBuf, MimicError> {
    for candidate in candidates {
        if candidate.exists() {
            debug!(path = %candidate.display(), "resolved model path");
            return Ok(candidate.clone());
        }
    }
    Err(MimicError::NotFound {
        searched: candidates.to_vec(),
    })
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn given_path_wins_when_it_exists() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let direct = dir.path().join("robot.urdf");
        fs::write(&direct, "<robot/>").expect("write");

        let resolved = resolve_from(&[direct.clone(), dir.path().join("other.urdf")]).unwrap();
        assert_eq!(resolved, direct);
    }

    #[test]
    fn fallback_directory_is_used_and_reported() {
        // The model is absent at the given bare filename but present in a
        // fallback search directory; the resolver must return the resolved
        // path, not the one the caller asked for.
        let fallback = tempfile::tempdir().expect("tmp dir");
        let in_fallback = fallback.path().join("robot.urdf");
        fs::write(&in_fallback, "<robot/>").expect("write");

        let given = PathBuf::from("robot.urdf");
        let resolved = resolve_from(&[
            PathBuf::from("/definitely/not/here/robot.urdf"),
            in_fallback.clone(),
        ])
        .unwrap();
        assert_eq!(resolved, in_fallback);
        assert_ne!(resolved, given);
    }

    #[test]
    fn not_found_lists_every_candidate() {
        let a = PathBuf::from("/nowhere/a.urdf");
        let b = PathBuf::from("/nowhere/b.urdf");
        let err = resolve_from(&[a.clone(), b.clone()]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/a.urdf"));
        assert!(msg.contains("/nowhere/b.urdf"));
        match err {
            MimicError::NotFound { searched } => assert_eq!(searched, vec![a, b]),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn resolve_model_path_honours_extra_dir() {
        let extra = tempfile::tempdir().expect("tmp dir");
        let model = extra.path().join("quadruped.urdf");
        fs::write(&model, "<robot/>").expect("write");

        let resolved =
            resolve_model_path(Path::new("quadruped.urdf"), Some(extra.path())).unwrap();
        assert_eq!(resolved, model);
    }
}
