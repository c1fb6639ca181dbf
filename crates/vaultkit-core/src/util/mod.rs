//! Small ownership and time helpers.

pub mod handle;
pub mod time;

pub use handle::{into_box, into_shared};
pub use time::{DEFAULT_TIME_FORMAT, format_at, formatted_time};
