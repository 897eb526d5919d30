use clap::{Parser, Subcommand};
use sea_orm::Database;
use sea_orm_migration::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "migration")]
#[command(about = "Apply or roll back the finfit schema")]
struct Cli {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:./finfit.db?mode=rwc")]
    database_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Apply every pending migration (default)
    Up,
    /// Roll back every applied migration
    Down,
    /// Drop all tables and apply every migration again
    Fresh,
    /// Print which migrations are applied
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let db = Database::connect(&cli.database_url).await?;

    match cli.command.unwrap_or(Command::Up) {
        Command::Up => migration::Migrator::up(&db, None).await?,
        Command::Down => migration::Migrator::down(&db, None).await?,
        Command::Fresh => migration::Migrator::fresh(&db).await?,
        Command::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_up() {
        let cli = Cli::try_parse_from(["migration", "--database-url", "sqlite::memory:"]).unwrap();
        assert_eq!(cli.database_url, "sqlite::memory:");
        assert_eq!(cli.command, None);
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["migration", "fresh"]).unwrap();
        assert_eq!(cli.command, Some(Command::Fresh));
        assert!(Cli::try_parse_from(["migration", "sideways"]).is_err());
    }
}
