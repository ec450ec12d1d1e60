//! Entry point: load environment, open the database, serve the API.

use wagewatch::server::{router, AppState};
use wagewatch::{Result, SalaryDatabase, DEFAULT_PORT, PORT_ENV_VAR};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let port = std::env::var(PORT_ENV_VAR)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let db = SalaryDatabase::new()?;
    let state = AppState::new(db)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    println!("Server is running on port {port}");
    axum::serve(listener, app).await?;

    Ok(())
}
