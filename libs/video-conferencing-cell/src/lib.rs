// libs/video-conferencing-cell/src/lib.rs
//! # Video Conferencing Cell
//!
//! Zoom integration for medical video consultations.
//!
//! ## Features
//!
//! - **Token Cache**: single-slot cache for the server-to-server OAuth token,
//!   refreshed lazily when missing or expired
//! - **Meeting Creation**: scheduled 30 minute meetings in UTC
//! - **Rescheduling**: partial update of a meeting's start time
//! - **Link Parsing**: meeting ID extraction from a join link
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------------------+
//! |                   Video Cell                        |
//! +-----------------------------------------------------+
//! |  models.rs      |  Wire types, defaults & errors    |
//! |  services/      |  Provider access layer            |
//! |    token.rs     |  OAuth token cache                |
//! |    zoom.rs      |  Meetings API client              |
//! +-----------------------------------------------------+
//! ```
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use shared_config::AppConfig;
//! use video_conferencing_cell::ZoomClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let zoom = ZoomClient::new(&config);
//!
//! let token = zoom.tokens().get_valid_token().await?;
//! let meeting = zoom.create_meeting(&token, Utc::now()).await?;
//! println!("{}", meeting.join_url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! - `CLIENT_ID`, `CLIENT_SECRET`, `ACCOUNT_ID` - server-to-server OAuth app
//! - `ZOOM_OAUTH_URL` - token endpoint (optional)
//! - `ZOOM_API_BASE_URL` - REST API base (optional)

pub mod models;
pub mod services;

// Re-export commonly used types
pub use models::{CachedToken, CreatedMeeting, UpdatedMeeting, VideoConferencingError};

pub use services::{extract_meeting_id, ZoomClient, ZoomTokenCache};
