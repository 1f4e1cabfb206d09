use clap::{Arg, ArgAction, CommandFactory, Parser, Subcommand};

use crate::commands::{add, list, remove, update};
use crate::router::{DispatchTable, ForwardTarget};

/// プラグインサブコマンドの引数名
pub const PLUGIN_ARGS: &str = "args";

#[derive(Debug, Parser)]
#[command(name = "forge")]
#[command(about = "Command Line Interface for Forge", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 省略時は list
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Install a plugin from a source
    Add(add::Args),

    /// Update one plugin, or every installed plugin when no name is given
    Update(update::Args),

    /// Remove one plugin, or every installed plugin when no name is given
    Remove(remove::Args),

    /// List installed plugins
    List(list::Args),
}

/// 組み込みコマンドに登録済みプラグインを加えたコマンドツリー
pub fn build_command(table: &DispatchTable) -> clap::Command {
    table
        .plugins()
        .fold(Cli::command(), |cmd, target| cmd.subcommand(plugin_subcommand(target)))
}

fn plugin_subcommand(target: &ForwardTarget) -> clap::Command {
    clap::Command::new(target.program.to_string())
        .about(format!("Run the '{}' plugin", target.package))
        .disable_help_flag(true)
        .arg(
            Arg::new(PLUGIN_ARGS)
                .num_args(0..)
                .action(ArgAction::Append)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}
