//! # Workspace
//!
//! Error taxonomy for the workspace-management layer of the CLI.
//!
//! This crate provides:
//! - One error type per failure raised by workspace discovery, project
//!   association and manifest lookup
//! - [`WorkspaceError`], the union of those kinds, with kind tags and
//!   manifest-aware matching
//!
//! ## Usage
//!
//! ```rust
//! use workspace::{ManifestNotFoundError, WorkspaceError};
//!
//! let err: WorkspaceError = ManifestNotFoundError::new("app.yml").into();
//! assert_eq!(err.to_string(), "manifest file app.yml does not exists");
//! assert!(ManifestNotFoundError::new("app.yml").matches(&err));
//! ```

pub mod errors;

pub use errors::{
    ErrorKind, ManifestNotFoundError, NoProjectAssociatedError, Result, WorkspaceError,
    WorkspaceHasExistingProjectError, WorkspaceNotFoundError,
};
