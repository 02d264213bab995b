use tracing_subscriber::EnvFilter;

// Logger compacto, filtrado por RUST_LOG (padrão "info").
// Chamadas repetidas são ignoradas: o primeiro subscriber registrado vence.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logger inicializado");
    }
}
