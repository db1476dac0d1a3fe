use serde::{Deserialize, Serialize, Serializer};

/// One playable audio item.
///
/// `id` is the 1-based position within a single listing and is not stable
/// across listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Seconds. Always 0 from the lister; the client decoder fills it in.
    #[serde(serialize_with = "serialize_seconds")]
    pub duration: f64,
    #[serde(default)]
    pub melody: Vec<serde_json::Value>,
    /// Root-relative URL of the audio file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// Whole seconds go out as JSON integers (`0`, not `0.0`).
fn serialize_seconds<S: Serializer>(seconds: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if seconds.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(seconds) {
        serializer.serialize_u64(*seconds as u64)
    } else {
        serializer.serialize_f64(*seconds)
    }
}

/// Envelope returned by the listing endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackList {
    pub tracks: Vec<Track>,
}

/// JSON body of a failed request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_serializes_with_wire_field_names() {
        let track = Track {
            id: "1".into(),
            title: "my song".into(),
            artist: "Unknown".into(),
            duration: 0.0,
            melody: vec![],
            audio: Some("/audio/my_song.mp3".into()),
        };
        let value = serde_json::to_value(&track).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "title": "my song",
                "artist": "Unknown",
                "duration": 0,
                "melody": [],
                "audio": "/audio/my_song.mp3",
            })
        );
    }

    #[test]
    fn test_track_without_audio_or_melody_deserializes() {
        let track: Track = serde_json::from_str(
            r#"{"id":"7","title":"added","artist":"Someone","duration":12}"#,
        )
        .unwrap();
        assert_eq!(track.audio, None);
        assert!(track.melody.is_empty());
        assert_eq!(track.duration, 12.0);
    }

    #[test]
    fn test_fractional_duration_round_trips() {
        let json = r#"{"id":"1","title":"a","artist":"Unknown","duration":183.4,"melody":[]}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.duration, 183.4);

        let value = serde_json::to_value(&track).unwrap();
        assert_eq!(value["duration"], serde_json::json!(183.4));
        let back: Track = serde_json::from_value(value).unwrap();
        assert_eq!(back, track);
    }

    #[test]
    fn test_whole_duration_serializes_as_integer() {
        let mut track: Track = serde_json::from_str(
            r#"{"id":"1","title":"a","artist":"Unknown","duration":0}"#,
        )
        .unwrap();
        assert!(serde_json::to_string(&track).unwrap().contains(r#""duration":0,"#));

        track.duration = 240.0;
        assert!(serde_json::to_string(&track).unwrap().contains(r#""duration":240,"#));
    }

    #[test]
    fn test_listing_with_fractional_duration_decodes() {
        let list: TrackList = serde_json::from_str(
            r#"{"tracks":[{"id":"1","title":"a","artist":"Unknown","duration":0},
                          {"id":"2","title":"b","artist":"Unknown","duration":61.25}]}"#,
        )
        .unwrap();
        assert_eq!(list.tracks.len(), 2);
        assert_eq!(list.tracks[1].duration, 61.25);
    }

    #[test]
    fn test_track_list_requires_tracks_field() {
        assert!(serde_json::from_str::<TrackList>(r#"{"items":[]}"#).is_err());
        let empty: TrackList = serde_json::from_str(r#"{"tracks":[]}"#).unwrap();
        assert!(empty.tracks.is_empty());
    }

    #[test]
    fn test_error_body_uses_status_code_key() {
        let body = ErrorBody {
            status_code: 500,
            message: "boom".into(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"statusCode":500,"message":"boom"}"#
        );
    }
}
