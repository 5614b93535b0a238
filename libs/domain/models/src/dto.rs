// [libs/domain/models/src/dto.rs]
//! Response-shape records produced directly by repository queries (§4.3) and
//! projected, largely unchanged, by the application services (§4.4). Kept in
//! the domain crate because both the store adapter and the HTTP surface need
//! them without creating a dependency cycle between those two crates.

use crate::ids::CompanyId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row in the ranking/search result sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierSummary {
    pub id: CompanyId,
    pub legal_name: String,
    pub score_total: u32,
    pub band: crate::enums::RiskBand,
    pub total_contracted_value: Money,
}

/// A single row in the critical-alert feed, already joined with its owning
/// supplier and optional partner (§4.4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertFeedItem {
    pub alert: crate::alert::CriticalAlert,
    pub supplier_id: CompanyId,
    pub supplier_legal_name: String,
    pub partner_name: Option<String>,
}

/// A node in the two-hop ownership graph (§4.3, §4.4).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphNodeKind {
    Company,
    Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: GraphNodeKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub kind: &'static str,
    pub share: Option<crate::money::Share>,
}

/// Projection of `graphTwoHops` with typed node/edge kinds (§4.4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub truncated: bool,
}

/// Per-source freshness metadata surfaced on `/stats` (§4.4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFreshness {
    pub source_name: String,
    pub last_update: DateTime<Utc>,
    pub row_count: u64,
}

/// Headline counts plus per-source freshness metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub supplier_count: u64,
    pub contract_count: u64,
    pub alert_count: u64,
    pub sanctioned_supplier_count: u64,
    pub sources: Vec<SourceFreshness>,
}

/// The two encodings a dossier export can actually produce; PDF is a stub
/// the application service rejects before ever constructing one (§4.4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportPayload {
    Json(Box<crate::dossier::CompleteDossier>),
    Csv(String),
}

/// Aggregate view of a government body's contracting activity (§4.4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgDashboard {
    pub org_code: String,
    pub total_contracted_value: Money,
    pub contract_count: u64,
    pub distinct_supplier_count: u64,
    pub top_suppliers: Vec<SupplierSummary>,
}
