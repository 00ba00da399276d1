//! The list of recorded clips shown on the page

use super::{AudioBlob, ClipPlayer, ObjectUrl, ObjectUrlStore};
use crate::{Result, SpeakClipError};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Name used when the user gives none
pub const DEFAULT_CLIP_NAME: &str = "Unnamed clip";

/// Suffix of every downloaded clip, whatever its actual encoding
pub const DOWNLOAD_EXTENSION: &str = "ogg";

/// Caption of the delete action
pub const DELETE_LABEL: &str = "Delete❌";

/// Caption of the download action
pub const DOWNLOAD_LABEL: &str = "Download⬇️";

/// Characters that cannot appear in a file name on common platforms
static UNSAFE_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("valid regex"));

static NEXT_CLIP_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one clip entry, independent of its name or position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId(u64);

impl ClipId {
    fn next() -> Self {
        ClipId(NEXT_CLIP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One recorded clip: label, playable URL and the audio behind it
#[derive(Debug)]
pub struct ClipEntry {
    pub id: ClipId,
    pub name: String,
    pub url: ObjectUrl,
    pub blob: AudioBlob,
}

/// Clips in creation order
///
/// Entries are addressed by 1-based position in the visible list.
pub struct ClipRegistry {
    entries: Vec<ClipEntry>,
    urls: ObjectUrlStore,
    download_dir: PathBuf,
}

impl ClipRegistry {
    pub fn new(urls: ObjectUrlStore, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            urls,
            download_dir: download_dir.into(),
        }
    }

    /// Append a clip for `blob` labelled `name`
    pub fn add(&mut self, name: impl Into<String>, blob: AudioBlob) -> Result<ClipId> {
        let name = name.into();
        let url = self.urls.create(&blob)?;
        let id = ClipId::next();

        info!("Added clip {:?} ({} bytes) at {}", name, blob.len(), url);
        self.entries.push(ClipEntry {
            id,
            name,
            url,
            blob,
        });
        Ok(id)
    }

    pub fn entries(&self) -> &[ClipEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Entry at 1-based `position`
    pub fn get(&self, position: usize) -> Result<&ClipEntry> {
        position
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(SpeakClipError::ClipNotFound(position))
    }

    /// Remove the entry at `position` and release its URL
    pub fn delete(&mut self, position: usize) -> Result<ClipEntry> {
        let index = self.get(position).map(|_| position - 1)?;
        let entry = self.entries.remove(index);
        self.urls.revoke(&entry.url);
        info!("Deleted clip {:?}", entry.name);
        Ok(entry)
    }

    /// Local file a player can open for the clip at `position`
    pub fn playable_path(&self, position: usize) -> Result<&Path> {
        let entry = self.get(position)?;
        self.urls.resolve(&entry.url).ok_or_else(|| {
            SpeakClipError::Other(format!("Clip {:?} has no playable file", entry.name))
        })
    }

    /// Play the clip at `position`
    pub fn play(&self, position: usize, player: &mut dyn ClipPlayer) -> Result<()> {
        let path = self.playable_path(position)?;
        player.play(path)
    }

    /// Save the clip at `position` as `<name>.ogg` in the download directory
    pub fn download(&self, position: usize) -> Result<PathBuf> {
        let entry = self.get(position)?;
        let source = self.playable_path(position)?;

        fs::create_dir_all(&self.download_dir)?;
        let target = unique_path(&self.download_dir, &download_stem(&entry.name));
        fs::copy(source, &target)?;

        info!("Downloaded clip {:?} to {:?}", entry.name, target);
        Ok(target)
    }
}

/// File name stem for a clip called `name`
fn download_stem(name: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(name, "_").into_owned()
}

/// `<dir>/<stem>.ogg`, or `<stem> (n).ogg` for the first free `n`
fn unique_path(dir: &Path, stem: &str) -> PathBuf {
    let first = dir.join(format!("{}.{}", stem, DOWNLOAD_EXTENSION));
    if !first.exists() {
        return first;
    }

    let mut n = 1;
    loop {
        let candidate = dir.join(format!("{} ({}).{}", stem, n, DOWNLOAD_EXTENSION));
        if !candidate.exists() {
            debug!("{:?} exists, using {:?}", first, candidate);
            return candidate;
        }
        n += 1;
    }
}
