//! Playlist state store
//!
//! Holds the last track listing, the track selected for playback and the
//! playback flag. UI code reads snapshots or subscribes for changes; only the
//! store's own methods mutate the state.

use crate::api::TrackSource;
use muse_common::{Track, LOAD_ERROR_MESSAGE};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Playlist state as seen by the UI
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MusicState {
    /// Track selected for playback. A copy taken when selected; later
    /// listings do not update or clear it.
    pub current_track: Option<Track>,
    /// Tracks from the last listing, plus any added locally
    pub tracks: Vec<Track>,
    /// Playback flag (not bound to any audio output)
    pub is_playing: bool,
    /// User-facing error message
    pub error: Option<String>,
    /// Whether a listing fetch is in flight
    pub is_loading: bool,
}

impl MusicState {
    /// Position of the current track in `tracks`, matched by id.
    pub fn current_index(&self) -> Option<usize> {
        let current = self.current_track.as_ref()?;
        self.tracks.iter().position(|t| t.id == current.id)
    }

    /// False when there is no current track or it is not in `tracks`.
    pub fn has_previous_track(&self) -> bool {
        self.current_index().is_some_and(|index| index > 0)
    }

    /// False when there is no current track or it is not in `tracks`.
    pub fn has_next_track(&self) -> bool {
        self.current_index()
            .is_some_and(|index| index + 1 < self.tracks.len())
    }
}

pub struct MusicStore {
    source: Arc<dyn TrackSource>,
    state: watch::Sender<MusicState>,
    /// Generation of the most recently issued fetch
    latest_fetch: AtomicU64,
}

/// Clears `is_loading` when the fetch that owns it finishes or is dropped,
/// unless a newer fetch has been issued since.
struct LoadingGuard<'a> {
    store: &'a MusicStore,
    generation: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.store.is_latest_fetch(self.generation) {
            self.store.state.send_modify(|s| s.is_loading = false);
        }
    }
}

impl MusicStore {
    pub fn new(source: Arc<dyn TrackSource>) -> Self {
        let (state, _) = watch::channel(MusicState::default());
        Self {
            source,
            state,
            latest_fetch: AtomicU64::new(0),
        }
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<MusicState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> MusicState {
        self.state.borrow().clone()
    }

    pub fn current_track(&self) -> Option<Track> {
        self.state.borrow().current_track.clone()
    }

    pub fn tracks(&self) -> Vec<Track> {
        self.state.borrow().tracks.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.state.borrow().is_playing
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn has_previous_track(&self) -> bool {
        self.state.borrow().has_previous_track()
    }

    pub fn has_next_track(&self) -> bool {
        self.state.borrow().has_next_track()
    }

    fn is_latest_fetch(&self, generation: u64) -> bool {
        self.latest_fetch.load(Ordering::SeqCst) == generation
    }

    /// Replace `tracks` with a fresh listing from the source.
    ///
    /// On success the first track becomes current if none is selected yet.
    /// On failure `tracks` is emptied and `error` gets a fixed message; the
    /// underlying error is only logged. If another fetch is issued while this
    /// one is in flight, this one's result is discarded.
    pub async fn fetch_tracks(&self) {
        let generation = self.latest_fetch.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
        });
        let _loading = LoadingGuard {
            store: self,
            generation,
        };

        let result = self.source.fetch_tracks().await;

        if !self.is_latest_fetch(generation) {
            match &result {
                Ok(_) => debug!("Discarding track listing from superseded fetch {generation}"),
                Err(e) => warn!("Superseded fetch {generation} failed to load tracks: {e}"),
            }
            return;
        }

        match result {
            Ok(listing) => {
                info!("Loaded {} tracks", listing.tracks.len());
                self.state.send_modify(|s| {
                    s.tracks = listing.tracks;
                    if s.current_track.is_none() {
                        s.current_track = s.tracks.first().cloned();
                    }
                });
            }
            Err(e) => {
                error!("Failed to load tracks: {e}");
                self.state.send_modify(|s| {
                    s.error = Some(LOAD_ERROR_MESSAGE.to_string());
                    s.tracks.clear();
                });
            }
        }
    }

    /// Select a track. It does not have to be in `tracks`.
    pub fn set_current_track(&self, track: Track) {
        self.state.send_modify(|s| s.current_track = Some(track));
    }

    /// Insert a track at the front of the list.
    pub fn add_track(&self, track: Track) {
        self.state.send_modify(|s| s.tracks.insert(0, track));
    }

    pub fn toggle_playback(&self) {
        self.state.send_modify(|s| s.is_playing = !s.is_playing);
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error = None);
    }

    pub fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.state.send_modify(|s| s.error = Some(message));
    }
}
