//! Tracing setup for binaries and tests embedding this client.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

/// Installs a global tracing subscriber once; later calls are no-ops.
/// Honors `RUST_LOG`, defaulting to info-level output for this crate.
/// Uses `try_init` so a host application that already installed its own
/// subscriber keeps it.
pub fn init_tracing() {
    let _ = INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("resultgrid=info"));
        let _ = fmt().with_env_filter(filter).with_target(false).try_init();
    });
}
