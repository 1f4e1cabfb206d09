mod cli;
mod commands;
mod config;
mod env;
mod error;
mod fs;
mod installer;
mod logging;
mod output;
mod plugin;
mod process;
mod progress;
mod router;

use crate::config::ForgeConfig;
use crate::env::EnvVar;
use crate::error::{ErrorFormatter, ForgeError, Result};
use crate::fs::RealFs;
use crate::installer::Installer;
use crate::plugin::PluginCatalog;
use crate::process::SystemRunner;
use crate::router::Router;

#[tokio::main]
async fn main() {
    logging::init();

    let code = match run().await {
        Ok(code) => code,
        Err(err) => {
            let formatter = ErrorFormatter::new(EnvVar::is_enabled(env::FORGE_VERBOSE));
            eprintln!("{}", formatter.format(&err.into_rich()));
            1
        }
    };
    std::process::exit(code);
}

async fn run() -> Result<i32> {
    let argv = collect_args()?;
    let config = ForgeConfig::load()?;
    let runner = SystemRunner;
    let fs = RealFs;

    let catalog = PluginCatalog::new(&fs, &config);
    let table = router::build_table(&catalog)?;

    let ctx = commands::Context {
        config: &config,
        catalog,
        installer: Installer::new(&runner, &config),
    };
    Router::new(&table, &runner).dispatch(&argv, &ctx).await
}

/// プラグインへそのまま渡すため、argv は UTF-8 であることを要求する
fn collect_args() -> Result<Vec<String>> {
    std::env::args_os()
        .map(|arg| {
            arg.into_string().map_err(|raw| {
                ForgeError::InvalidArguments(format!(
                    "argument is not valid UTF-8: {}",
                    raw.to_string_lossy()
                ))
            })
        })
        .collect()
}
