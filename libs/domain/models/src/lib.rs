// [libs/domain/models/src/lib.rs]
/*!
 * =================================================================
 * APARATO: DOSSIER DOMAIN MODEL
 * CLASIFICACION: DOMAIN CORE (ESTRATO L0)
 * RESPONSABILIDAD: TIPOS DE VALOR, ENTIDADES Y FORMAS DE RESPUESTA
 *   COMPARTIDAS ENTRE EL ADAPTADOR DE PERSISTENCIA Y LA API
 *
 * Todo lo definido aqui es puro: sin I/O, sin dependencia del motor
 * de reglas ni del adaptador de almacenamiento. Constructores validan
 * invariantes (checksum, no-negatividad, rangos) en el punto de entrada
 * para que el resto del sistema pueda asumirlos ya satisfechos.
 * =================================================================
 */

pub mod alert;
pub mod contract;
pub mod donation;
pub mod dossier;
pub mod dto;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod money;
pub mod ownership;
pub mod partner;
pub mod sanction;
pub mod score;
pub mod supplier;

pub use alert::CriticalAlert;
pub use contract::Contract;
pub use donation::Donation;
pub use dossier::CompleteDossier;
pub use dto::{
    AlertFeedItem, ExportPayload, GraphEdge, GraphNode, GraphNodeKind, GraphView, OrgDashboard, SourceFreshness,
    Stats, SupplierSummary,
};
pub use enums::{AlertKind, CadastralStatus, DonationResourceType, IndicatorKind, RiskBand, SanctionKind, Severity};
pub use errors::DomainError;
pub use ids::{CnaeCode, CompanyId, GovOrgCode, PersonId, PersonIdHash, TenderNumber};
pub use money::{Money, Share};
pub use ownership::OwnershipLink;
pub use partner::Partner;
pub use sanction::Sanction;
pub use score::{ScoreBreakdown, ScoreIndicator};
pub use donation::Candidate;
pub use supplier::{Address, Supplier};
