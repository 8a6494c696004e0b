//! Browser glue shared by the pages and components.

use chrono::{DateTime, Utc};

/// Shows a blocking message box. Failures to open it are ignored.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Current instant from the browser clock.
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}
