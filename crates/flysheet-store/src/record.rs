use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flysheet_types::ArtifactId;

/// Metadata for one stored artifact.
///
/// A record is registered only after the artifact's bytes have been durably
/// written, and is removed no earlier than the bytes are deleted. The
/// `expires_at` instant is fixed at creation and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// The artifact this record describes.
    pub id: ArtifactId,
    /// Backend-provided descriptor of where the bytes live. Diagnostic
    /// only; lookups always go by `id`.
    pub location: String,
    /// Instant the artifact was created.
    pub created_at: DateTime<Utc>,
    /// Instant from which the artifact is no longer served.
    pub expires_at: DateTime<Utc>,
    /// Size of the stored bytes.
    pub size: u64,
}

impl ArtifactRecord {
    /// Returns `true` if the artifact has lapsed at `now`.
    ///
    /// The expiry boundary is inclusive: an artifact is expired at exactly
    /// `expires_at`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(created_at: DateTime<Utc>, ttl: Duration) -> ArtifactRecord {
        ArtifactRecord {
            id: ArtifactId::mint(),
            location: "mem:test".to_string(),
            created_at,
            expires_at: created_at + ttl,
            size: 42,
        }
    }

    #[test]
    fn fresh_record_is_not_expired() {
        let now = Utc::now();
        let r = record(now, Duration::minutes(5));
        assert!(!r.is_expired(now));
        assert!(!r.is_expired(now + Duration::minutes(4)));
    }

    #[test]
    fn record_expires_after_ttl() {
        let now = Utc::now();
        let r = record(now, Duration::minutes(5));
        assert!(r.is_expired(now + Duration::minutes(5) + Duration::seconds(1)));
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let now = Utc::now();
        let r = record(now, Duration::minutes(5));
        assert!(r.is_expired(r.expires_at));
    }

    #[test]
    fn serde_roundtrip() {
        let r = record(Utc::now(), Duration::minutes(5));
        let json = serde_json::to_string(&r).unwrap();
        let parsed: ArtifactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r, parsed);
    }
}
