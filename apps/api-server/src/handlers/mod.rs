// [apps/api-server/src/handlers/mod.rs]
/*!
 * =================================================================
 * APARATO: API ADAPTER HUB
 * CLASIFICACIÓN: APPLICATION ADAPTERS (ESTRATO L4)
 * RESPONSABILIDAD: EXPOSICIÓN NOMINAL DE PUNTOS DE ENTRADA (HANDLERS)
 *
 * Un modulo por familia de recursos (§6). Cada handler valida, invoca
 * exactamente un servicio de aplicacion y codifica el resultado — nunca
 * alcanza un repositorio directamente.
 * =================================================================
 */

pub mod alerts;
pub mod contracts;
pub mod orgs;
pub mod stats;
pub mod suppliers;
