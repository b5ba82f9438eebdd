use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Current time as unix milliseconds, the unit stored in every `created_at` column.
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

pub fn format_rfc3339(millis: i64) -> crate::Result<String> {
    let date = OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * 1_000_000)?;

    Ok(date.format(&Rfc3339)?)
}
