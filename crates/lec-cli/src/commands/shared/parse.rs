use std::fmt::Display;
use std::str::FromStr;

/// Parse a status or level typed on the command line (`pending-payment`,
/// `approved`, `BEGINNER`).
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional value, passing `None` through.
pub fn parse_optional<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    raw.map(|raw| parse_enum(raw, field)).transpose()
}
