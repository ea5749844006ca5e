//! application entry point

use crate::server::model::config::ServerConfig;
use derive_more::Display;
use log::{info, warn};
use std::env;
use std::path::Path;
use std::str::FromStr;

mod server;

const HOST_PARSING_FAILED_MSG: &str = "failed to parse HOST, aborting";
const DEV_DOTENV_PATH: &str = ".env.dev";

#[actix_web::main()]
async fn main() -> std::io::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv_result = match env {
        Env::Prod | Env::Stg => Ok(()), // injected by deployment
        Env::Dev => dotenvy::from_path(Path::new(DEV_DOTENV_PATH)),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = dotenv_result {
        warn!("could not load {}, falling back to process env: {}", DEV_DOTENV_PATH, e);
    }

    // c. run app
    let host = env::var("HOST").ok();
    let config = ServerConfig::from_host(host.as_deref()).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{HOST_PARSING_FAILED_MSG}: {}: {e}", host.as_deref().unwrap_or_default()),
        )
    })?;

    info!("App is starting in env={} on {}", env, config.addr);

    server::run(config).await
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
