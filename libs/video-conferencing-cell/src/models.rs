// libs/video-conferencing-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==============================================================================
// MEETING DEFAULTS
// ==============================================================================

pub const MEETING_TOPIC: &str = "Cita Médica";
pub const MEETING_DURATION_MINUTES: u32 = 30;
pub const MEETING_TIMEZONE: &str = "UTC";
/// Zoom meeting type 2 is a scheduled meeting.
pub const SCHEDULED_MEETING: u8 = 2;

// ==============================================================================
// OAUTH TOKEN
// ==============================================================================

/// Bearer token held by the process-wide cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Deserialize)]
pub struct ZoomTokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: i64,
    pub scope: Option<String>,
}

// ==============================================================================
// MEETINGS API
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CreateMeetingRequest {
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: u8,
    pub start_time: String,
    pub duration: u32,
    pub timezone: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateMeetingResponse {
    pub id: Option<u64>,
    pub join_url: Option<String>,
}

/// A meeting the provider accepted and returned a join link for.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedMeeting {
    pub id: Option<u64>,
    pub join_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMeetingRequest {
    pub start_time: String,
}

/// Body of a meeting update. Zoom normally answers `204 No Content`, so every
/// field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UpdatedMeeting {
    pub join_url: Option<String>,
}

// ==============================================================================
// ERROR HANDLING
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum VideoConferencingError {
    #[error("Zoom token request failed: {message}")]
    TokenRequest { message: String },

    #[error("Zoom API error: {message}")]
    ApiError {
        status: Option<u16>,
        message: String,
    },

    #[error("Zoom did not return a join_url for the meeting")]
    MissingJoinUrl,
}

impl From<reqwest::Error> for VideoConferencingError {
    fn from(err: reqwest::Error) -> Self {
        VideoConferencingError::ApiError {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_token_expiry_boundary() {
        let now = Utc::now();
        let token = CachedToken {
            value: "abc".to_string(),
            expires_at: now,
        };

        assert!(token.is_expired_at(now));
        assert!(!token.is_expired_at(now - Duration::seconds(1)));
    }

    #[test]
    fn test_create_request_serialization() {
        let request = CreateMeetingRequest {
            topic: MEETING_TOPIC.to_string(),
            meeting_type: SCHEDULED_MEETING,
            start_time: "2024-10-30T10:00:00.000Z".to_string(),
            duration: MEETING_DURATION_MINUTES,
            timezone: MEETING_TIMEZONE.to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "topic": "Cita Médica",
                "type": 2,
                "start_time": "2024-10-30T10:00:00.000Z",
                "duration": 30,
                "timezone": "UTC"
            })
        );
    }
}
