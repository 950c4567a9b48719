use serde_json::json;

use shared_config::AppConfig;

pub struct TestConfig {
    pub zoom_base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub account_id: String,
    pub email_user: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            zoom_base_url: "http://localhost:9999".to_string(),
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
            account_id: "test-account-id".to_string(),
            email_user: "citas@example.com".to_string(),
        }
    }
}

impl TestConfig {
    /// Points both the OAuth endpoint and the meetings API at a mock server.
    pub fn with_mock_server(uri: &str) -> Self {
        Self {
            zoom_base_url: uri.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn oauth_path() -> &'static str {
        "/oauth/token"
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            zoom_client_id: self.client_id.clone(),
            zoom_client_secret: self.client_secret.clone(),
            zoom_account_id: self.account_id.clone(),
            zoom_oauth_url: format!("{}{}", self.zoom_base_url, Self::oauth_path()),
            zoom_api_base_url: format!("{}/v2", self.zoom_base_url),
            email_service_user: self.email_user.clone(),
            email_service_pass: "test-password".to_string(),
            smtp_host: "localhost".to_string(),
            default_time_zone: chrono_tz::America::Guayaquil,
            port: 0,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

pub struct MockZoomResponses;

impl MockZoomResponses {
    pub fn token_response(access_token: &str, expires_in: i64) -> serde_json::Value {
        json!({
            "access_token": access_token,
            "token_type": "bearer",
            "expires_in": expires_in,
            "scope": "meeting:write:admin meeting:read:admin",
            "api_url": "https://api.zoom.us"
        })
    }

    pub fn meeting_response(meeting_id: u64, join_url: Option<&str>) -> serde_json::Value {
        let mut body = json!({
            "id": meeting_id,
            "uuid": "4444AAAiAAAAAiAiAiiAii==",
            "host_id": "KDcuGIm1QgePTO8WbOqwIQ",
            "topic": "Cita Médica",
            "type": 2,
            "start_time": "2024-10-30T10:00:00Z",
            "duration": 30,
            "timezone": "UTC",
            "created_at": "2024-10-01T12:00:00Z"
        });
        if let Some(url) = join_url {
            body["join_url"] = json!(url);
        }
        body
    }

    pub fn error_response(code: u32, message: &str) -> serde_json::Value {
        json!({
            "code": code,
            "message": message
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::with_mock_server("http://127.0.0.1:4000/").to_app_config();

        assert_eq!(config.zoom_oauth_url, "http://127.0.0.1:4000/oauth/token");
        assert_eq!(config.zoom_api_base_url, "http://127.0.0.1:4000/v2");
        assert_eq!(config.email_service_user, "citas@example.com");
    }

    #[test]
    fn test_meeting_response_without_join_url() {
        let body = MockZoomResponses::meeting_response(123, None);
        assert!(body.get("join_url").is_none());

        let body = MockZoomResponses::meeting_response(123, Some("https://zoom.us/j/123"));
        assert_eq!(body["join_url"], "https://zoom.us/j/123");
    }
}
