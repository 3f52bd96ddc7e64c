use taskmesh::commands::Cli;
use taskmesh::libs::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    let _ = dotenv::dotenv();
    logging::init();

    Cli::menu().await
}
