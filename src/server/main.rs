use std::sync::Arc;

use todo_service::adapters::{HttpConfig, HttpTransport};
use todo_service::storage::sqlite::SqliteTodoStore;

const DATABASE_URL: &str = "sqlite://todos.db?mode=rwc";
const LISTEN_ADDR: &str = "0.0.0.0:9000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let database_url =
        std::env::var("TODO_DATABASE_URL").unwrap_or_else(|_| DATABASE_URL.to_string());
    let listen_addr =
        std::env::var("TODO_LISTEN_ADDR").unwrap_or_else(|_| LISTEN_ADDR.to_string());

    // A store connection failure here is fatal; the error propagates out of
    // main and the process exits before serving anything.
    let store = Arc::new(SqliteTodoStore::connect(&database_url).await?);

    let transport = HttpTransport::new(store, HttpConfig::default());
    transport.serve(&listen_addr).await?;
    Ok(())
}
