use chrono::{Local, NaiveDateTime};

/// Format a backend-local timestamp relative to the local clock, e.g. `5 dakika önce`.
pub fn format_relative_time(datetime: &NaiveDateTime) -> String {
    format_relative_time_since(datetime, &Local::now().naive_local())
}

pub fn format_relative_time_since(datetime: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let duration = now.signed_duration_since(*datetime);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "az önce".to_string()
    } else if minutes < 60 {
        format!("{} dakika önce", minutes)
    } else if hours < 24 {
        format!("{} saat önce", hours)
    } else if days < 30 {
        format!("{} gün önce", days)
    } else if days < 365 {
        format!("{} ay önce", days / 30)
    } else {
        format!("{} yıl önce", days / 365)
    }
}
