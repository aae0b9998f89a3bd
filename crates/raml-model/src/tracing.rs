//! # Observability
//!
//! The model logs through `tracing` with structured fields: `debug!` for every
//! resolution and every fragment merge, `info!` once per completed application
//! pass, `warn!` right before a fatal error is returned.
//!
//! Binaries call [`setup_tracing`] once at startup. Verbosity follows `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info raml-resolve api.yaml /users
//! RUST_LOG=raml_model=debug raml-resolve api.yaml /users
//! ```

/// Installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
