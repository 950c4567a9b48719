pub mod error;

pub use error::{AppError, PAYLOAD_TOO_LARGE_MESSAGE};
