use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod brand;
pub mod flags;
pub mod health;
pub mod logo;
pub mod palette;
pub mod validation;

/// Current UTC time as an RFC 3339 string.
pub(crate) fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
