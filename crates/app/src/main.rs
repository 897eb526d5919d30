use clap::Parser;
use migration::{Migrator, MigratorTrait};

mod settings;

#[derive(Parser, Debug)]
#[command(name = "finfit")]
#[command(about = "Expense tracking HTTP backend")]
struct Cli {
    /// Settings file, with or without the `.toml` extension.
    #[arg(long, env = "FINFIT_CONFIG", default_value = "config/settings")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "finfit={level},server={level},engine={level},field_validation={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    let Some(server) = settings.server else {
        tracing::warn!("no [server] section in {}, nothing to run", cli.config);
        return Ok(());
    };

    tracing::info!("Found server settings...");
    let db = connect_database(&server.database).await?;
    let engine = engine::Engine::builder().database(db).build().await?;

    let options = server::ServerOptions {
        request_timeout: server.request_timeout(),
    };
    let listener = tokio::net::TcpListener::bind(server.addr()).await?;
    server::run_with_listener(engine, listener, options).await?;

    Ok(())
}

async fn connect_database(
    config: &settings::Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let database = sea_orm::Database::connect(config.url()).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
