//! Meeting Timer - A timer-driven HTTP server for running Level 10 meetings
//!
//! This is the main entry point for the meeting-timer application.

use tokio::net::TcpListener;
use tracing::info;

use meeting_timer::{
    api::create_router,
    config::Config,
    state::shared_state,
    tasks::ticker_task,
    timer::Countdown,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("meeting_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting meeting-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, length={}min",
          config.host, config.port, config.length);

    // Build the countdown; a malformed agenda is the one fatal error
    let segments = config.segments()?;
    let timer = Countdown::new(config.total_secs()?, segments)?;
    for segment in timer.segments() {
        info!("Agenda segment: {} ({}min)", segment.name, segment.duration_secs / 60);
    }

    // Create application state
    let state = shared_state(timer, config.port, config.host.clone());

    // Start the countdown ticker background task
    let ticker_state = state.clone();
    tokio::spawn(async move {
        ticker_task(ticker_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start or resume the countdown");
    info!("  POST /pause  - Pause the countdown");
    info!("  POST /reset  - Reset the countdown");
    info!("  GET  /status - Current countdown state");
    info!("  GET  /agenda - Configured agenda segments");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
