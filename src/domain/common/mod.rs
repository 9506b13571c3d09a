//! Helpers shared by the domain entities
//!
//! Identifier generation, millisecond clock conversions and text checks.

mod clock;
mod id;
mod text;

pub use clock::{
    end_of_day_millis, get_millis, millis_for_time, pad_date_string_zeros, start_of_day_millis,
    time_for_millis,
};
pub use id::{is_valid_id, new_id, ID_LENGTH};
pub use text::{etag, is_lower, is_valid_email, is_valid_number_string, sanitize_unicode};
