//! # Utility helpers
//!
//! ### Ignore rules (`repolensignore`)
//! - **Pattern Matching**: gitignore-style exclusions from `.repolensignore`
//! - **Negation**: `!pattern` re-includes previously excluded paths
//!
//! ```rust,no_run
//! use repolens_core::utils::repolensignore::RepolensIgnore;
//! use std::path::Path;
//!
//! let ignore = RepolensIgnore::from_directory(Path::new("."));
//! if ignore.should_exclude(Path::new("generated/schema.rs"), false) {
//!     println!("skipped");
//! }
//! ```

pub mod repolensignore;

use std::fs;
use std::path::Path;
use tracing::warn;

/// True for a regular file at `path`. Symlinks are never followed.
pub fn is_regular_file(path: &Path) -> bool {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            warn!("Skipping symlink {}", path.display());
            false
        }
        Ok(meta) => meta.is_file(),
        Err(_) => false,
    }
}
