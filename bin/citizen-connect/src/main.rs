//! # CitizenConnect Binary
//!
//! Assembles the session store, the role dashboards and the HTTP surface
//! from the plugins selected at compile time.

use std::sync::Arc;

use anyhow::Context;
use cc_api::{router, AppState};
use cc_config::{LogSettings, Settings, SlotBackend};
use cc_core::dashboards::Dashboards;
use cc_core::session::SessionStore;
use cc_core::{IdentityProvider, SessionSlot};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[cfg(not(all(feature = "session-local", feature = "auth-stub")))]
compile_error!("citizen-connect needs the `session-local` and `auth-stub` features");

#[cfg(feature = "session-local")]
use cc_session_local::{FileSessionSlot, MemorySessionSlot};

#[cfg(feature = "auth-stub")]
use cc_auth_stub::StubIdentityProvider;

fn init_tracing(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    if log.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    init_tracing(&settings.log);

    // 1. Session slot
    let slot: Arc<dyn SessionSlot> = match settings.session.backend {
        SlotBackend::File => Arc::new(FileSessionSlot::new(&settings.session.slot_path)),
        SlotBackend::Memory => Arc::new(MemorySessionSlot::new()),
    };

    // 2. Identity provider (no real authentication)
    let identity: Arc<dyn IdentityProvider> = Arc::new(StubIdentityProvider::new());

    // 3. Session store, restored once from the slot
    let session = SessionStore::restore(slot, identity).await;

    // 4. Shared state and routes
    let state = Arc::new(AppState::new(
        session,
        Dashboards::seeded(),
        settings.ui.default_language,
    ));
    let app = router(state);

    let addr = settings.server.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, backend = ?settings.session.backend, "CitizenConnect listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("serving http")?;

    info!("shut down");
    Ok(())
}
