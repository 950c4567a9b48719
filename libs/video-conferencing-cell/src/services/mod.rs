// libs/video-conferencing-cell/src/services/mod.rs

pub mod token;
pub mod zoom;

pub use token::ZoomTokenCache;
pub use zoom::{extract_meeting_id, ZoomClient};
