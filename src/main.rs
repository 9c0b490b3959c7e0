//! Simulador Tributário - process bootstrap
//!
//! ## Usage
//!
//! ```bash
//! simulador-web                 # Start on 0.0.0.0:5000
//! PORT=8080 simulador-web       # Custom port
//! DEBUG=true simulador-web      # Verbose logging
//! ```

use simulador_web::{routes, serve, AppState, Config};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Initialize logging; DEBUG=true widens the default filter.
    let default_filter = if config.debug {
        "simulador_web=debug,tower_http=debug"
    } else {
        "simulador_web=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = format!("0.0.0.0:{}", config.port);

    println!("Simulador Tributário - lead capture backend");
    println!("Leads file: {}", config.data_file.display());
    println!("Assets dir: {}", config.static_dir.display());
    routes::print_routes();
    println!("Server ready at http://{}", addr);

    let state = Arc::new(AppState::new(config));
    serve(state, &addr).await?;

    Ok(())
}
