//! `taskmesh serve`: run services.

use crate::{
    api::UsersClient,
    db::db::Db,
    libs::{
        config::{Config, ResolverConfig, Service, ServiceConfig},
        messages::Message,
    },
    server,
};
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::sync::Arc;
use tracing::info;

/// Database shared by all services in the combined mode.
pub const COMBINED_DB_FILE: &str = "taskmesh.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Projects,
    Tasks,
    Users,
    /// All three services on one listener (the tasks address by default)
    All,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(value_enum)]
    target: Target,

    /// Listen host
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file name inside the data directory
    #[arg(long)]
    db: Option<String>,

    /// Base URL of the users service (tasks only)
    #[arg(long)]
    users_url: Option<String>,

    /// Name lookup timeout in milliseconds (tasks only)
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl ServeArgs {
    fn service_config(&self, config: &Config) -> ServiceConfig {
        let mut service = match self.target {
            Target::Projects => config.service(Service::Projects),
            Target::Users => config.service(Service::Users),
            Target::Tasks => config.service(Service::Tasks),
            Target::All => ServiceConfig {
                db_file: COMBINED_DB_FILE.to_string(),
                ..config.service(Service::Tasks)
            },
        };
        if let Some(host) = &self.host {
            service.host = host.clone();
        }
        if let Some(port) = self.port {
            service.port = port;
        }
        if let Some(db) = &self.db {
            service.db_file = db.clone();
        }
        service
    }

    fn resolver_config(&self, config: &Config) -> ResolverConfig {
        let mut resolver = config.resolver();
        if let Some(url) = &self.users_url {
            resolver.users_url = url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            resolver.timeout_ms = timeout_ms;
        }
        resolver
    }

    fn label(&self) -> &'static str {
        match self.target {
            Target::Projects => Service::Projects.key(),
            Target::Tasks => Service::Tasks.key(),
            Target::Users => Service::Users.key(),
            Target::All => "combined",
        }
    }
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = Config::read()?.with_env_overrides();
    let service = args.service_config(&config);
    let db = Db::new(&service.db_file)?;

    let app = match args.target {
        Target::Projects => server::projects_app(&db),
        Target::Users => server::users_app(&db),
        Target::Tasks => {
            let resolver = args.resolver_config(&config);
            info!("{}", Message::ServiceResolverRemote(resolver.users_url.clone(), resolver.timeout_ms));
            let client = UsersClient::new(&resolver.users_url, resolver.timeout())?;
            server::tasks_app(&db, Arc::new(client))
        }
        Target::All => {
            info!("{}", Message::ServiceResolverLocal);
            server::combined_app(&db)
        }
    };

    server::serve(app, &service.address(), args.label()).await
}
