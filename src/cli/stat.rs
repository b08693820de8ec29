//! Statistics commands

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use tinysrc::client::models::DATE_FORMAT;
use tinysrc::error::{Error, Result};
use tinysrc::{StatApi, StatRequest, StatResponse};

use crate::cli::{OutputFormat, PaginationArgs};
use crate::models::ClickDisplay;
use crate::output;

/// Parse a UTC time given as `YYYY-MM-DD HH:MM:SS` or a bare `YYYY-MM-DD`.
///
/// A bare date means midnight, or the last second of the day when
/// `end_of_day` is set, so `--to 2024-01-31` includes the whole of the 31st.
pub fn parse_time(value: &str, end_of_day: bool) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(time) = NaiveDateTime::parse_from_str(value, DATE_FORMAT) {
        return Ok(time.and_utc());
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        Error::Other(format!(
            "Invalid time '{value}': expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS"
        ))
    })?;
    let time = if end_of_day {
        date.and_hms_opt(23, 59, 59)
    } else {
        date.and_hms_opt(0, 0, 0)
    };
    time.map(|t| t.and_utc())
        .ok_or_else(|| Error::Other(format!("Invalid time '{value}'")))
}

/// Run `stat get`.
pub async fn get<C: StatApi + ?Sized>(
    api: &C,
    hash: &str,
    from: &str,
    to: &str,
    pagination: &PaginationArgs,
    default_limit: u32,
    format: OutputFormat,
) -> Result<String> {
    let date_start = parse_time(from, false)?;
    let date_end = parse_time(to, true)?;
    if date_end < date_start {
        return Err(Error::Other(format!(
            "Invalid range: --to ({}) is before --from ({})",
            date_end.format(DATE_FORMAT),
            date_start.format(DATE_FORMAT)
        )));
    }

    let params = StatRequest::new(
        pagination.limit_or(default_limit),
        pagination.page,
        date_start,
        date_end,
    );
    log::debug!("Fetching stats for {} with {:?}", hash, params);

    let page = api.get_stats(hash, &params).await?;
    let mut out = output::render_list::<StatResponse, ClickDisplay>(&page.data, format)?;
    if format == OutputFormat::Table && !page.is_empty() {
        out.push_str(&format!(
            "\nPage {}: {} of {} clicks",
            params.page,
            page.len(),
            page.total
        ));
    }
    Ok(out)
}
