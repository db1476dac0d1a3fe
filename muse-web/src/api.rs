use async_trait::async_trait;
use muse_common::{TrackList, TRACKS_ENDPOINT};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Source of track listings for the playlist store.
///
/// The HTTP client is the production implementation; tests plug in their own.
#[async_trait]
pub trait TrackSource: Send + Sync {
    /// Fetch the full track listing.
    async fn fetch_tracks(&self) -> Result<TrackList, ApiError>;
}

/// Fetches listings from the server's tracks endpoint.
pub struct HttpTrackClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTrackClient {
    /// `base_url` is the server origin, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn tracks_url(&self) -> String {
        format!("{}{}", self.base_url, TRACKS_ENDPOINT)
    }
}

#[async_trait]
impl TrackSource for HttpTrackClient {
    async fn fetch_tracks(&self) -> Result<TrackList, ApiError> {
        let resp = self.http.get(self.tracks_url()).send().await?;

        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status().as_u16()));
        }

        Ok(resp.json::<TrackList>().await?)
    }
}
