use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::LabelFormat;

/// Render `at` in `tz` using `format`.
#[must_use]
pub fn format_label(at: DateTime<Utc>, tz: Tz, format: LabelFormat) -> String {
    at.with_timezone(&tz).format(format.pattern()).to_string()
}
