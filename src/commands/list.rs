//! forge list コマンド
//!
//! インストール済みプラグインのコマンド名とバージョンを表で表示する。

use super::Context;
use crate::error::Result;
use crate::output;
use crate::plugin::{CommandName, PluginMetadata};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

const EMPTY_MESSAGE: &str = "No forge plugins installed yet! - Run forge --help for help";

#[derive(Debug, Default, Parser)]
pub struct Args {}

pub fn run<R>(_args: Args, ctx: &Context<'_, R>) -> Result<()> {
    let plugins = ctx.catalog.list_installed()?;
    if plugins.is_empty() {
        output::warn_line(EMPTY_MESSAGE);
        return Ok(());
    }

    println!("{}", build_table(&plugins)?);
    Ok(())
}

/// 表に出す行（コマンド名, バージョン）
fn rows(plugins: &[PluginMetadata]) -> Result<Vec<(CommandName, String)>> {
    plugins
        .iter()
        .map(|p| Ok((CommandName::from_metadata(p)?, p.version.clone())))
        .collect()
}

fn build_table(plugins: &[PluginMetadata]) -> Result<Table> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["plugin", "version"]);
    for (name, version) in rows(plugins)? {
        table.add_row(vec![name.to_string(), version]);
    }
    Ok(table)
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
