// [libs/domain/models/src/alert.rs]
use crate::enums::{AlertKind, Severity};
use crate::ids::PersonIdHash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A binary critical-alert signal, as emitted by `sentinel-domain-risk::alerts`.
///
/// `evidence` is a deterministic structured string carrying the traceable
/// identifiers that triggered the alert (§3, §4.1) — never free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalAlert {
    pub kind: AlertKind,
    pub severity: Severity,
    pub description: String,
    pub evidence: String,
    pub detected_at: DateTime<Utc>,
    pub partner_reference: Option<PersonIdHash>,
}

impl CriticalAlert {
    /// The de-duplication key for §4.1's "duplicates across the same
    /// (kind, partner?) pair are collapsed to one" rule.
    pub fn dedup_key(&self) -> (AlertKind, Option<PersonIdHash>) {
        (self.kind, self.partner_reference.clone())
    }
}
