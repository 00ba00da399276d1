//! Recorded clips: assembled audio, playable URLs, playback and the clip list

pub mod blob;
pub mod object_url;
pub mod player;
pub mod registry;

pub use blob::AudioBlob;
pub use object_url::{ObjectUrl, ObjectUrlStore};
pub use player::{ClipPlayer, RodioPlayer};
pub use registry::{ClipEntry, ClipId, ClipRegistry, DEFAULT_CLIP_NAME};
