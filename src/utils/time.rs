use chrono::{DateTime, Duration, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    now().date_naive()
}

/// Calendar date `days` after today, used as the default application deadline.
pub fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}
