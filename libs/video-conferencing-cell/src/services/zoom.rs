// libs/video-conferencing-cell/src/services/zoom.rs
use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use tracing::{debug, error, info, warn};

use shared_config::AppConfig;
use shared_utils::to_provider_timestamp;

use crate::models::{
    CreateMeetingRequest, CreateMeetingResponse, CreatedMeeting, UpdateMeetingRequest,
    UpdatedMeeting, VideoConferencingError, MEETING_DURATION_MINUTES, MEETING_TIMEZONE,
    MEETING_TOPIC, SCHEDULED_MEETING,
};
use crate::services::token::ZoomTokenCache;

/// Zoom REST API client for scheduling consultation meetings.
/// Based on: https://developers.zoom.us/docs/api/meetings/
pub struct ZoomClient {
    client: Client,
    api_base_url: String,
    tokens: ZoomTokenCache,
}

impl ZoomClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::new();

        Self {
            tokens: ZoomTokenCache::new(client.clone(), config),
            client,
            api_base_url: config.zoom_api_base_url.clone(),
        }
    }

    pub fn tokens(&self) -> &ZoomTokenCache {
        &self.tokens
    }

    /// Create a scheduled 30 minute meeting starting at `start_time`
    /// POST /users/me/meetings
    pub async fn create_meeting(
        &self,
        token: &str,
        start_time: DateTime<Utc>,
    ) -> Result<CreatedMeeting, VideoConferencingError> {
        let url = format!("{}/users/me/meetings", self.api_base_url);

        let request_body = CreateMeetingRequest {
            topic: MEETING_TOPIC.to_string(),
            meeting_type: SCHEDULED_MEETING,
            start_time: to_provider_timestamp(start_time),
            duration: MEETING_DURATION_MINUTES,
            timezone: MEETING_TIMEZONE.to_string(),
        };

        debug!("Sending meeting creation request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        debug!("Zoom meeting creation response: {} - {}", status, response_text);

        if !status.is_success() {
            error!("Zoom meeting creation failed: {} - {}", status, response_text);
            return Err(VideoConferencingError::ApiError {
                status: Some(status.as_u16()),
                message: format!("HTTP {}: {}", status, response_text),
            });
        }

        let meeting: CreateMeetingResponse = serde_json::from_str(&response_text).map_err(|e| {
            VideoConferencingError::ApiError {
                status: Some(status.as_u16()),
                message: format!("Failed to parse meeting response: {}", e),
            }
        })?;

        let join_url = meeting
            .join_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                error!("Zoom created meeting {:?} without a join_url", meeting.id);
                VideoConferencingError::MissingJoinUrl
            })?;

        info!("Successfully created Zoom meeting: {:?}", meeting.id);
        Ok(CreatedMeeting {
            id: meeting.id,
            join_url,
        })
    }

    /// Move an existing meeting to `new_start_time`, leaving every other field untouched
    /// PATCH /meetings/{meetingId}
    pub async fn update_meeting(
        &self,
        meeting_id: &str,
        new_start_time: DateTime<Utc>,
        token: &str,
    ) -> Result<UpdatedMeeting, VideoConferencingError> {
        info!("Rescheduling Zoom meeting: {}", meeting_id);

        let url = format!("{}/meetings/{}", self.api_base_url, meeting_id);

        let request_body = UpdateMeetingRequest {
            start_time: to_provider_timestamp(new_start_time),
        };

        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!("Zoom meeting update failed: {} - {}", status, response_text);
            return Err(VideoConferencingError::ApiError {
                status: Some(status.as_u16()),
                message: format!("HTTP {}: {}", status, response_text),
            });
        }

        if response_text.trim().is_empty() {
            info!("Successfully rescheduled Zoom meeting: {}", meeting_id);
            return Ok(UpdatedMeeting::default());
        }

        let updated = serde_json::from_str(&response_text).unwrap_or_else(|e| {
            warn!("Ignoring unreadable meeting update body: {}", e);
            UpdatedMeeting::default()
        });

        info!("Successfully rescheduled Zoom meeting: {}", meeting_id);
        Ok(updated)
    }
}

/// Returns the last path segment of a meeting link, e.g. `123456789` for
/// `https://zoom.us/j/123456789?pwd=abc`. `None` if the link is not a URL or
/// has no trailing segment.
pub fn extract_meeting_id(meeting_link: &str) -> Option<String> {
    let url = match Url::parse(meeting_link.trim()) {
        Ok(url) => url,
        Err(e) => {
            warn!("Could not parse meeting link {:?}: {}", meeting_link, e);
            return None;
        }
    };

    url.path()
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_meeting_id_from_join_link() {
        assert_eq!(
            extract_meeting_id("https://zoom.us/j/123456789"),
            Some("123456789".to_string())
        );
        assert_eq!(
            extract_meeting_id("https://us05web.zoom.us/j/84512345678?pwd=aBcD.1"),
            Some("84512345678".to_string())
        );
    }

    #[test]
    fn test_extract_meeting_id_rejects_non_urls() {
        assert_eq!(extract_meeting_id("not-a-url"), None);
        assert_eq!(extract_meeting_id(""), None);
    }

    #[test]
    fn test_extract_meeting_id_requires_final_segment() {
        assert_eq!(extract_meeting_id("https://zoom.us/"), None);
        assert_eq!(extract_meeting_id("https://zoom.us/j/"), None);
    }
}
