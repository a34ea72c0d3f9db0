use api::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber, log_error},
};

/// Local users API server
///
/// Serves the same `/users` and `/users/{id}` endpoints as the public
/// JSONPlaceholder API, from fixture data compiled into the binary. Point the
/// UI at it by building with `API_URL=http://127.0.0.1:8000`.
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root. All are optional:
/// - IP_ADDRESS: Server bind address (default 127.0.0.1)
/// - PORT: Server port (default 8000, 0 for an OS-assigned port)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin, or a comma-separated
///   list)
/// - RESPONSE_DELAY_MS: Latency added to users responses, useful for seeing
///   the loading state in the UI (default 0)
///
/// Example development command:
/// RESPONSE_DELAY_MS=800 cargo run -p api
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file if available
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log_error(e);
            std::process::exit(1);
        }
    };

    let server = build(&mut config).map_err(std::io::Error::other)?;
    server.await
}
