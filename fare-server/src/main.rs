use fare_server::{Config, Server, ServerError, ServerState, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env is optional)
    let dotenv = dotenvy::dotenv();
    init_logger();
    if let Err(e) = dotenv
        && !e.not_found()
    {
        tracing::warn!("Failed to load .env: {e}");
    }

    tracing::info!("Fare server starting...");

    // 2. Configuration
    let config = Config::from_env();

    // 3. Schema + seed, before the listener binds
    let state = match ServerState::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            let err = ServerError::from(e);
            tracing::error!("{err}");
            return Err(err.into());
        }
    };

    // 4. Serve until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
