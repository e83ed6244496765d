//! Error types raised by workspace discovery, project association and manifest lookup

use serde::{Serialize, Serializer};
use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for workspace operations
pub type Result<T> = std::result::Result<T, WorkspaceError>;

/// The workspace root could not be located by walking up from the current directory
#[derive(Error, Debug, Clone, Serialize)]
#[error(
    "couldn't find a directory called {manifest_directory_name} up to {number_of_levels_checked} levels up from {}",
    .current_directory.display()
)]
pub struct WorkspaceNotFoundError {
    /// Directory the search started from
    #[serde(serialize_with = "serialize_path_lossy")]
    pub current_directory: PathBuf,
    /// Name of the directory that marks a workspace root
    pub manifest_directory_name: String,
    /// How many parent levels were searched
    pub number_of_levels_checked: usize,
}

impl WorkspaceNotFoundError {
    pub fn new(
        current_directory: impl Into<PathBuf>,
        manifest_directory_name: impl Into<String>,
        number_of_levels_checked: usize,
    ) -> Self {
        Self {
            current_directory: current_directory.into(),
            manifest_directory_name: manifest_directory_name.into(),
            number_of_levels_checked,
        }
    }
}

fn serialize_path_lossy<S: Serializer>(
    path: &Path,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// No workspace summary file links this workspace to a project
#[derive(Error, Debug, Clone, Copy, Default, Serialize)]
#[error("couldn't find a project associated with this workspace")]
pub struct NoProjectAssociatedError;

/// The workspace already belongs to another project
#[derive(Error, Debug, Clone, Serialize)]
#[error("this workspace is already registered with project {existing_project_name}")]
pub struct WorkspaceHasExistingProjectError {
    /// Project the workspace is currently registered with
    pub existing_project_name: String,
}

impl WorkspaceHasExistingProjectError {
    pub fn new(existing_project_name: impl Into<String>) -> Self {
        Self {
            existing_project_name: existing_project_name.into(),
        }
    }
}

/// No manifest with the given name exists under the manifest root.
///
/// Two values are equal when they name the same manifest, so callers can ask
/// "is this the missing manifest X" with [`ManifestNotFoundError::matches`]
/// or [`ManifestNotFoundError::is_in`] instead of inspecting fields.
///
/// The message text, including "does not exists", is stable and must not be reworded.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[error("manifest file {manifest_name} does not exists")]
pub struct ManifestNotFoundError {
    /// Name of the missing manifest
    pub manifest_name: String,
}

impl ManifestNotFoundError {
    pub fn new(manifest_name: impl Into<String>) -> Self {
        Self {
            manifest_name: manifest_name.into(),
        }
    }

    /// Returns true if `target` reports the same missing manifest, either bare
    /// or wrapped in a [`WorkspaceError`]. Any other error kind never matches.
    pub fn matches(&self, target: &(dyn StdError + 'static)) -> bool {
        if let Some(other) = target.downcast_ref::<ManifestNotFoundError>() {
            return self == other;
        }

        target
            .downcast_ref::<WorkspaceError>()
            .and_then(WorkspaceError::as_manifest_not_found)
            .is_some_and(|other| self == other)
    }

    /// Like [`matches`](Self::matches), but also follows the `source()` chain of `err`.
    pub fn is_in(&self, err: &(dyn StdError + 'static)) -> bool {
        std::iter::successors(Some(err), |&e| e.source()).any(|e| self.matches(e))
    }
}

/// Stable identifier for each workspace error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`WorkspaceNotFoundError`]
    WorkspaceNotFound,
    /// See [`NoProjectAssociatedError`]
    NoProjectAssociated,
    /// See [`WorkspaceHasExistingProjectError`]
    WorkspaceHasExistingProject,
    /// See [`ManifestNotFoundError`]
    ManifestNotFound,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::WorkspaceNotFound => "workspace_not_found",
            ErrorKind::NoProjectAssociated => "no_project_associated",
            ErrorKind::WorkspaceHasExistingProject => "workspace_has_existing_project",
            ErrorKind::ManifestNotFound => "manifest_not_found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every failure a workspace operation can report
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkspaceError {
    /// No workspace root above the current directory
    #[error(transparent)]
    WorkspaceNotFound(#[from] WorkspaceNotFoundError),

    /// Workspace has no project
    #[error(transparent)]
    NoProjectAssociated(#[from] NoProjectAssociatedError),

    /// Workspace is bound to a different project
    #[error(transparent)]
    WorkspaceHasExistingProject(#[from] WorkspaceHasExistingProjectError),

    /// Named manifest is missing
    #[error(transparent)]
    ManifestNotFound(#[from] ManifestNotFoundError),
}

impl WorkspaceError {
    /// Tag of the wrapped error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkspaceError::WorkspaceNotFound(_) => ErrorKind::WorkspaceNotFound,
            WorkspaceError::NoProjectAssociated(_) => ErrorKind::NoProjectAssociated,
            WorkspaceError::WorkspaceHasExistingProject(_) => {
                ErrorKind::WorkspaceHasExistingProject
            }
            WorkspaceError::ManifestNotFound(_) => ErrorKind::ManifestNotFound,
        }
    }

    pub fn as_manifest_not_found(&self) -> Option<&ManifestNotFoundError> {
        match self {
            WorkspaceError::ManifestNotFound(e) => Some(e),
            _ => None,
        }
    }

    /// Compares the variant first, then the payload.
    ///
    /// - `ManifestNotFound` matches when both name the same manifest.
    /// - `NoProjectAssociated` carries no payload, so it always matches itself.
    /// - `WorkspaceNotFound` and `WorkspaceHasExistingProject` define no payload
    ///   equality and never match; use [`kind`](Self::kind) to branch on the variant alone.
    pub fn matches(&self, other: &WorkspaceError) -> bool {
        if self.kind() != other.kind() {
            return false;
        }

        match (self, other) {
            (WorkspaceError::ManifestNotFound(a), WorkspaceError::ManifestNotFound(b)) => a == b,
            (WorkspaceError::NoProjectAssociated(_), WorkspaceError::NoProjectAssociated(_)) => {
                true
            }
            _ => false,
        }
    }

    /// Writes a `warn` record on target `workspace` as `{kind}: {message}`
    pub fn log(&self) {
        log::warn!(target: "workspace", "{}: {}", self.kind(), self);
    }
}
