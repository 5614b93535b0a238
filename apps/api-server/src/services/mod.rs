// [apps/api-server/src/services/mod.rs]
//! Application services: each orchestrates one or more repositories (and,
//! for the dossier, the live rule engine) into a response shape (§4.4).
//! Handlers call these; they never touch a repository directly.

pub mod alerts_feed;
pub mod dossier;
pub mod export;
pub mod graph_view;
pub mod org_dashboard;
pub mod ranking;
pub mod search;
pub mod stats;
