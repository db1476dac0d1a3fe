pub mod api;
pub mod store;

pub use api::{ApiError, HttpTrackClient, TrackSource};
pub use store::{MusicState, MusicStore};
