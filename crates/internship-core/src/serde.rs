// Module name shadows the `serde` crate, so the external crate is `::serde`.

/// `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds and a `Z`
/// suffix. Use with `#[serde(serialize_with = "internship_core::serde::rfc3339_ms")]`.
pub fn rfc3339_ms<S>(dt: &chrono::DateTime<chrono::Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: ::serde::Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}
