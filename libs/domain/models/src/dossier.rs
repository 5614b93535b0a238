// [libs/domain/models/src/dossier.rs]
use crate::alert::CriticalAlert;
use crate::contract::Contract;
use crate::donation::Donation;
use crate::partner::Partner;
use crate::sanction::Sanction;
use crate::score::ScoreBreakdown;
use crate::supplier::Supplier;
use serde::{Deserialize, Serialize};

/// The full enriched dossier: identity + cadastral + contracts + partners +
/// sanctions + donations + alerts + score + disclaimer (§4.4). Assembled by
/// the dossier application service; never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteDossier {
    pub supplier: Supplier,
    pub contracts: Vec<Contract>,
    pub partners: Vec<Partner>,
    pub sanctions: Vec<Sanction>,
    pub donations: Vec<Donation>,
    pub alerts: Vec<CriticalAlert>,
    pub score: ScoreBreakdown,
    pub disclaimer: String,
}
