//! Column conversion helpers shared by the query modules.

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use rusqlite::{types::Type, Row};

use crate::models::Status;

fn conversion_error<E>(idx: usize, e: E) -> rusqlite::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.into())
}

pub(super) fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| conversion_error(idx, e))
}

pub(super) fn date_column(row: &Row, idx: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(idx)?
        .parse::<Date>()
        .map_err(|e| conversion_error(idx, e))
}

pub(super) fn optional_date_column(row: &Row, idx: usize) -> rusqlite::Result<Option<Date>> {
    row.get::<_, Option<String>>(idx)?
        .map(|s| s.parse::<Date>().map_err(|e| conversion_error(idx, e)))
        .transpose()
}

pub(super) fn status_column(row: &Row, idx: usize) -> rusqlite::Result<Status> {
    let value: String = row.get(idx)?;
    value
        .parse::<Status>()
        .map_err(|_| conversion_error(idx, format!("Invalid status: {value}")))
}

/// Stores dependency IDs as a comma-separated list, NULL when empty.
pub(super) fn encode_depends_on(ids: &[u64]) -> Option<String> {
    if ids.is_empty() {
        None
    } else {
        Some(
            ids.iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

pub(super) fn decode_depends_on(value: Option<String>) -> Vec<u64> {
    value
        .map(|s| {
            s.split(',')
                .filter_map(|id| id.trim().parse::<u64>().ok())
                .collect()
        })
        .unwrap_or_default()
}

/// The current calendar date in UTC.
pub(crate) fn today_utc() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}
