//! Backend entry-point: loads settings, wires the HTTP server and runs it.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use todo_backend::inbound::http::health::HealthState;
use todo_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let default_locale = settings.default_locale().map_err(std::io::Error::other)?;

    let session =
        session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
            .map_err(std::io::Error::other)?;

    let config = ServerConfig::new(session, bind_addr).with_default_locale(default_locale);
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "todo backend listening");
    let outcome = server.await;
    health_state.mark_unhealthy();
    info!("todo backend stopped");
    outcome
}
