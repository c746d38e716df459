pub mod format;

pub use format::{format_date, format_datetime, format_optional, format_phone, truncate};
