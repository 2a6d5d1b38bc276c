//! # Proof Timestamps
//!
//! [`Timestamp`] is the type of the `created` and `expires` members of a
//! proof. It is rendered as `YYYY-MM-DDTHH:MM:SSZ`: UTC, whole seconds.
//!
//! The rendered string is part of the signed proof configuration, so a
//! proof signer must always emit the same string for the same instant.
//! Sub-second precision is dropped on construction and [`Timestamp::parse`]
//! only accepts the `Z` form. Proofs produced by other implementations may
//! carry offsets or fractions; [`Timestamp::parse_lenient`] reads those.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VcdiError;

const PROOF_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A proof time: UTC, whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current time.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Wrap a `DateTime<Utc>`, dropping sub-second precision.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(0))
    }

    /// Parse the canonical `Z`-suffixed form.
    ///
    /// # Errors
    ///
    /// Returns `VcdiError::Timestamp` for anything that is not RFC 3339 with
    /// a literal `Z`, including `+00:00`.
    pub fn parse(s: &str) -> Result<Self, VcdiError> {
        match s.strip_suffix('Z') {
            Some(_) => Self::parse_lenient(s),
            None => Err(VcdiError::Timestamp(format!(
                "expected a UTC time ending in 'Z', got {s:?}"
            ))),
        }
    }

    /// Parse any RFC 3339 time, normalizing to UTC.
    pub fn parse_lenient(s: &str) -> Result<Self, VcdiError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::from_utc(dt.with_timezone(&Utc)))
            .map_err(|e| VcdiError::Timestamp(format!("{s:?} is not an RFC 3339 time: {e}")))
    }

    /// From seconds since the Unix epoch.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, VcdiError> {
        DateTime::from_timestamp(secs, 0)
            .map(Self)
            .ok_or_else(|| VcdiError::Timestamp(format!("epoch seconds out of range: {secs}")))
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Whether this time is strictly before `now`.
    pub fn has_passed(&self, now: Timestamp) -> bool {
        self.0 < now.0
    }

    /// The canonical string form, as embedded in proofs.
    pub fn to_iso8601(&self) -> String {
        self.0.format(PROOF_TIME_FORMAT).to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(PROOF_TIME_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_lenient(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Timelike};

    #[test]
    fn created_now_is_whole_seconds() {
        assert_eq!(Timestamp::now().as_datetime().nanosecond(), 0);
    }

    #[test]
    fn fractions_are_dropped() {
        let dt = Utc.with_ymd_and_hms(2026, 4, 2, 8, 15, 59).unwrap() + Duration::milliseconds(999);
        assert_eq!(Timestamp::from_utc(dt).to_iso8601(), "2026-04-02T08:15:59Z");
    }

    #[test]
    fn strict_parse_wants_z() {
        let ts = Timestamp::parse("2026-04-02T08:15:00Z").unwrap();
        assert_eq!(ts.to_string(), "2026-04-02T08:15:00Z");
        for bad in [
            "2026-04-02T08:15:00+00:00",
            "2026-04-02T10:15:00+02:00",
            "2026-04-02",
            "",
            "Z",
        ] {
            assert!(Timestamp::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn lenient_parse_normalizes_offsets() {
        let ts = Timestamp::parse_lenient("2026-04-02T10:15:00.5+02:00").unwrap();
        assert_eq!(ts, Timestamp::parse("2026-04-02T08:15:00Z").unwrap());
    }

    #[test]
    fn expiry_comparison() {
        let expires = Timestamp::parse("2026-04-02T08:15:00Z").unwrap();
        let before = Timestamp::parse("2026-04-02T08:14:59Z").unwrap();
        let after = Timestamp::parse("2026-04-02T08:15:01Z").unwrap();
        assert!(!expires.has_passed(before));
        assert!(!expires.has_passed(expires));
        assert!(expires.has_passed(after));
    }

    #[test]
    fn epoch_seconds() {
        let ts = Timestamp::from_epoch_secs(1_775_117_700).unwrap();
        assert_eq!(ts.to_iso8601(), "2026-04-02T08:15:00Z");
        assert!(Timestamp::from_epoch_secs(i64::MAX).is_err());
    }

    #[test]
    fn json_form_is_the_proof_string() {
        let ts = Timestamp::parse_lenient("2026-04-02T08:15:00.250Z").unwrap();
        let json = serde_json::to_value(ts).unwrap();
        assert_eq!(json, serde_json::json!("2026-04-02T08:15:00Z"));
        assert_eq!(serde_json::from_value::<Timestamp>(json).unwrap(), ts);
        assert!(serde_json::from_value::<Timestamp>(serde_json::json!(17)).is_err());
    }
}
