//! Playable URLs for in-memory clips
//!
//! Each blob is written once into a private temporary directory and
//! addressed through a `file://` URL until it is revoked. Dropping the
//! store removes the directory with everything still in it.

use super::AudioBlob;
use crate::{Result, SpeakClipError};
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// URL handed out for a materialized blob
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owner of every live object URL
pub struct ObjectUrlStore {
    dir: TempDir,
    next_id: u64,
    live: HashMap<ObjectUrl, PathBuf>,
}

impl ObjectUrlStore {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("speakclip-")
            .tempdir()
            .map_err(|e| {
                SpeakClipError::Config(format!("Failed to create clip directory: {}", e))
            })?;
        debug!("Clip storage at {:?}", dir.path());

        Ok(Self {
            dir,
            next_id: 1,
            live: HashMap::new(),
        })
    }

    /// Materialize `blob` and return a URL pointing at it
    pub fn create(&mut self, blob: &AudioBlob) -> Result<ObjectUrl> {
        let path = self
            .dir
            .path()
            .join(format!("clip-{}.{}", self.next_id, blob.extension()));
        self.next_id += 1;

        fs::write(&path, blob.playable_bytes()?)?;

        let url = ObjectUrl(format!("file://{}", path.display()));
        debug!("Created {} ({} bytes of {})", url, blob.len(), blob.mime_type());
        self.live.insert(url.clone(), path);
        Ok(url)
    }

    /// Local file behind `url`, if it has not been revoked
    pub fn resolve(&self, url: &ObjectUrl) -> Option<&Path> {
        self.live.get(url).map(PathBuf::as_path)
    }

    /// Release `url` and delete its file; false if it was not live
    pub fn revoke(&mut self, url: &ObjectUrl) -> bool {
        match self.live.remove(url) {
            Some(path) => {
                if let Err(e) = fs::remove_file(&path) {
                    warn!("Failed to remove {:?}: {}", path, e);
                }
                debug!("Revoked {}", url);
                true
            }
            None => false,
        }
    }

    /// Number of live URLs
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_revoke() {
        let mut store = ObjectUrlStore::new().unwrap();
        let blob = AudioBlob::new(b"OggS".to_vec(), "audio/ogg");

        let url = store.create(&blob).unwrap();
        assert!(url.as_str().starts_with("file://"));

        let path = store.resolve(&url).unwrap().to_path_buf();
        assert_eq!(fs::read(&path).unwrap(), b"OggS");

        assert!(store.revoke(&url));
        assert!(!path.exists());
        assert!(store.resolve(&url).is_none());
        assert!(!store.revoke(&url));
    }

    #[test]
    fn test_urls_are_unique() {
        let mut store = ObjectUrlStore::new().unwrap();
        let blob = AudioBlob::new(vec![0, 0], "audio/L16;rate=8000");
        let a = store.create(&blob).unwrap();
        let b = store.create(&blob).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
