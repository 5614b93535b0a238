// [libs/domain/risk-engine/src/lib.rs]
/*!
 * =================================================================
 * APARATO: RISK RULE ENGINE
 * CLASIFICACION: DOMAIN CORE (ESTRATO L0)
 * RESPONSABILIDAD: DETECCION DE ALERTAS CRITICAS Y CALCULO DE SCORE
 *
 * Dos dimensiones completamente independientes: `alerts::detect_critical_alerts`
 * y `score::compute_cumulative_score`. Ninguna llama a la otra, ninguna
 * comparte tipos de salida, y un test de propiedad en `tests/` certifica
 * que ningun identificador de alerta aparece en el modulo de score y
 * viceversa (spec §9). Ambas funciones son puras: ni I/O ni estado mutable,
 * toda la entrada llega ya materializada en memoria.
 * =================================================================
 */

pub mod alerts;
pub mod context;
pub mod score;
pub mod thresholds;

pub use alerts::detect_critical_alerts;
pub use context::{AlertContext, RelatedSupplier, ScoreContext, StrawmanSignals};
pub use score::compute_cumulative_score;
