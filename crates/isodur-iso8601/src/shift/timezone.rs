//! Timezone identifier resolution for zoned shifts.

use chrono_tz::Tz;
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{DurationError, DurationResult};

/// Resolver for timezone identifiers.
///
/// Maintains a cache of resolved IANA timezones keyed by the identifier as
/// given, so repeated lookups of client-specific spellings stay cheap.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    /// Creates a new timezone resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// ## Summary
    /// Resolves a timezone identifier to a `chrono_tz::Tz`.
    ///
    /// Accepts IANA names (`America/New_York`), `UTC`/`GMT`/`Z`, and IANA
    /// names carrying a `/mozilla.org/` or `/softwarestudio.org/` prefix.
    ///
    /// ## Errors
    ///
    /// Returns `DurationError::UnknownTimezone` if the identifier cannot be resolved.
    ///
    /// ## Side Effects
    ///
    /// Caches successful resolutions to avoid repeated parsing.
    pub fn resolve(&mut self, tzid: &str) -> DurationResult<Tz> {
        if let Some(tz) = self.cache.get(tzid) {
            tracing::trace!(tzid, "Timezone cache hit");
            return Ok(*tz);
        }

        let tz = Tz::from_str(normalize_tzid(tzid)).map_err(|_e| {
            tracing::warn!(tzid, "Unknown timezone");
            DurationError::UnknownTimezone(tzid.to_string())
        })?;

        self.cache.insert(tzid.to_string(), tz);

        Ok(tz)
    }
}

/// Strips vendor prefixes and maps the `Z` alias to `UTC`.
fn normalize_tzid(tzid: &str) -> &str {
    let trimmed = tzid.trim();
    let stripped = trimmed
        .strip_prefix("/mozilla.org/")
        .or_else(|| trimmed.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(trimmed);

    if stripped.eq_ignore_ascii_case("Z") {
        "UTC"
    } else {
        stripped
    }
}
