use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

pub fn now_utc_rfc3339() -> Result<String, time::error::Format> {
    OffsetDateTime::now_utc().format(&Rfc3339)
}

/// Calendar date of an RFC 3339 timestamp, or the raw value when it does
/// not parse.
pub fn display_date(timestamp: &str) -> String {
    let format = format_description!("[year]-[month]-[day]");
    OffsetDateTime::parse(timestamp, &Rfc3339)
        .ok()
        .and_then(|value| value.format(&format).ok())
        .unwrap_or_else(|| timestamp.to_string())
}
