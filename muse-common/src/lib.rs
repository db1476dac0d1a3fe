//! Wire types shared by the track lister and the playlist store.

mod track;

pub use track::{ErrorBody, Track, TrackList};

/// Route serving the track listing.
pub const TRACKS_ENDPOINT: &str = "/api/music/tracks";

/// URL prefix under which audio files are served statically.
pub const AUDIO_URL_PREFIX: &str = "/audio";

/// Filename suffixes recognized as playable audio. Matching is case-sensitive.
pub const AUDIO_EXTENSIONS: [&str; 3] = [".mp3", ".wav", ".ogg"];

/// Placeholder artist; no tag metadata is read.
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Message returned to HTTP callers when the audio directory cannot be listed.
pub const LISTING_ERROR_MESSAGE: &str = "Ошибка при получении списка треков";

/// Message surfaced by the playlist store when a fetch fails.
pub const LOAD_ERROR_MESSAGE: &str = "Ошибка при загрузке треков";
