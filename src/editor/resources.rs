//! Transient preview handles for locally selected image files.
//!
//! A preview handle is the terminal equivalent of a browser object URL: cheap to
//! create, and it must be released once nothing displays it any more.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A file supplied by the local file picker. Size and type are not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub path: PathBuf,
}

impl LocalFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }
}

/// Revocable handle to a preview of a [`LocalFile`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host capability that creates and releases preview handles.
pub trait PreviewResources {
    fn create(&mut self, file: &LocalFile) -> PreviewUrl;
    fn release(&mut self, url: &PreviewUrl);
}

/// Swap the handle in `slot` for a preview of `file` (or clear it).
///
/// The new handle is created before the old one is released, so the slot never
/// points at a released handle and no handle is orphaned.
pub fn replace_resource<R: PreviewResources + ?Sized>(
    resources: &mut R,
    slot: &mut Option<PreviewUrl>,
    file: Option<&LocalFile>,
) {
    let next = file.map(|file| resources.create(file));
    if let Some(previous) = slot.take() {
        resources.release(&previous);
    }
    *slot = next;
}

/// In-process preview registry used by the dashboard.
#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    live: HashMap<PreviewUrl, PathBuf>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles created and not yet released
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn resolve(&self, url: &PreviewUrl) -> Option<&Path> {
        self.live.get(url).map(PathBuf::as_path)
    }
}

impl PreviewResources for ObjectUrlRegistry {
    fn create(&mut self, file: &LocalFile) -> PreviewUrl {
        let url = PreviewUrl::new(format!("blob:chatolution/{}", Uuid::new_v4()));
        log::debug!("Preview created for {} -> {}", file.path.display(), url);
        self.live.insert(url.clone(), file.path.clone());
        url
    }

    fn release(&mut self, url: &PreviewUrl) {
        if self.live.remove(url).is_none() {
            log::warn!("Release of unknown preview handle {}", url);
        }
    }
}
