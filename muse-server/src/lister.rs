//! Directory scan that turns audio files into track records.
//!
//! Only immediate entries are looked at. Entries keep the order the
//! filesystem hands them out in, and ids are assigned after filtering.

use muse_common::{Track, AUDIO_EXTENSIONS, AUDIO_URL_PREFIX, UNKNOWN_ARTIST};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ListerError {
    #[error("failed to read audio directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whether the filename ends in one of the recognized audio extensions.
pub fn is_audio_file(name: &str) -> bool {
    AUDIO_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Everything before the first `.`, with underscores turned into spaces.
pub fn title_from_file_name(name: &str) -> String {
    let stem = name.split_once('.').map_or(name, |(stem, _)| stem);
    stem.replace('_', " ")
}

/// Filter filenames down to audio files and build one track per match.
pub fn tracks_from_file_names<I, S>(names: I) -> Vec<Track>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|name| is_audio_file(name.as_ref()))
        .enumerate()
        .map(|(index, name)| {
            let name = name.as_ref();
            Track {
                id: (index + 1).to_string(),
                title: title_from_file_name(name),
                artist: UNKNOWN_ARTIST.to_string(),
                duration: 0.0,
                melody: Vec::new(),
                audio: Some(format!("{AUDIO_URL_PREFIX}/{name}")),
            }
        })
        .collect()
}

/// List the audio files directly inside `dir`.
pub async fn list_tracks(dir: &Path) -> Result<Vec<Track>, ListerError> {
    let read_err = |source: std::io::Error| ListerError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_err)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    let tracks = tracks_from_file_names(&names);
    debug!(
        "Listed {} tracks from {} entries in {}",
        tracks.len(),
        names.len(),
        dir.display()
    );
    Ok(tracks)
}
