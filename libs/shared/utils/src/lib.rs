pub mod test_utils;
pub mod time;

pub use time::{parse_instant, resolve_time_zone, to_provider_timestamp};
