use tracing_subscriber::{fmt, EnvFilter};

/// Inicializa el subscriber de `tracing`.
///
/// El nivel se controla con `RUST_LOG` (por defecto `info`), por ejemplo
/// `RUST_LOG=creditrack=debug` para ver los ramos sin registros.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Variante para tests: nivel `debug`, salida capturada por el harness.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
