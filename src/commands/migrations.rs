use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{
        config::{Config, Service},
        messages::Message,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use prettytable::{row, Table};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    /// Service whose database to inspect
    #[arg(value_enum)]
    service: Service,

    /// Database file name, overriding the configured one
    #[arg(long)]
    db: Option<String>,

    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let db_file = match args.db {
        Some(db_file) => db_file,
        None => Config::read()?.service(args.service).db_file,
    };
    let conn = Db::new_without_migrations(&db_file)?;

    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&conn)?;

            msg_print!(Message::DatabaseVersion(version));
            if needs_migration(&conn)? {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_success!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            let history = MigrationManager::new().get_migration_history(&conn)?;
            if history.is_empty() {
                msg_info!(Message::NoMigrationsApplied);
                return Ok(());
            }

            msg_print!(Message::MigrationHistory);
            let mut table = Table::new();
            table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
            for (version, name, applied_at) in history {
                table.add_row(row![version, name, applied_at]);
            }
            table.printstd();
        }
    }

    Ok(())
}
