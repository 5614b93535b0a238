// [libs/shared/telemetry/src/lib.rs]
/*!
 * =================================================================
 * APARATO: TELEMETRY BOOTSTRAP
 * CLASIFICACION: SHARED UTILITY (ESTRATO L0)
 * RESPONSABILIDAD: INICIALIZACION DE TRAZAS Y CAPTURA DE PANICOS
 *
 * Arranca un unico subscriber global compartido por los binarios del
 * servicio: salida compacta y legible en desarrollo, JSON aplanado en
 * release. Instala tambien un panic hook que deja rastro antes de que
 * el proceso termine, en vez de perder el contexto en un SIGKILL.
 * =================================================================
 */

use std::panic;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as formatting_layer, EnvFilter};

/// Initializes the global tracing subscriber for `service_name`.
///
/// # Panics
/// Panics if a global subscriber has already been installed in this process.
pub fn init_tracing(service_name: &str) {
    let environmental_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "{service_name}={level},tower_http=warn,libsql=warn",
            level = if cfg!(debug_assertions) { "debug" } else { "info" }
        )
        .into()
    });

    let is_release = !cfg!(debug_assertions);

    if is_release {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().compact().with_target(false))
            .init();
    }

    install_panic_hook(service_name);

    tracing::info!("👁️  [TELEMETRY_ONLINE]: Trazas levelizadas para [{service_name}]. Panic shield activo.");
}

fn install_panic_hook(service_name: &str) {
    let service = service_name.to_string();

    panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string panic payload>");

        tracing::error!(
            target: "panic_monitor",
            service = %service,
            location = %location,
            "🔥 [CRITICAL_PANIC]: Thread terminated abruptly. Analysis: {payload}"
        );
    }));
}
