//! コマンドルーター
//!
//! 起動時にカタログから一度だけディスパッチテーブルを構築し、
//! 呼び出しを組み込みコマンドかプラグイン実行ファイルへ振り分ける。

mod forward;
mod help;
mod table;

pub use table::{DispatchTable, ForwardTarget};

use forward::forward;
use help::{intercept, HelpRequest};

use crate::cli::{self, Cli, Command};
use crate::commands::{self, list, Context};
use crate::error::Result;
use crate::plugin::PluginCatalog;
use crate::process::ProcessRunner;
use clap::FromArgMatches;
use std::io::Write;

/// 組み込みコマンドとカタログのプラグインからテーブルを構築する
///
/// カタログの読み取りに失敗しても組み込みコマンドだけで起動を続ける。
/// 組み込みコマンド側がカタログを読み直すときに改めてエラーになる。
pub fn build_table(catalog: &PluginCatalog<'_>) -> Result<DispatchTable> {
    match catalog.list_installed() {
        Ok(plugins) => DispatchTable::builder().register_all(&plugins),
        Err(e) => {
            tracing::warn!(error = %e, "could not read plugin catalog; only built-in commands are available");
            Ok(DispatchTable::builder().finish())
        }
    }
}

/// 振り分け結果
#[derive(Debug)]
pub enum Route {
    /// プラグインへ転送（引数は argv のまま）
    Forward {
        target: ForwardTarget,
        args: Vec<String>,
    },
    BuiltIn(Command),
    /// clap が処理する出力（ヘルプ・バージョン・使い方エラー）
    Clap(clap::Error),
}

/// argv（先頭はプログラム名）の振り分け先を決める
pub fn resolve(table: &DispatchTable, argv: &[String]) -> Route {
    let args = argv.get(1..).unwrap_or_default();

    if let HelpRequest::ForwardToPlugin(target) = intercept(args, table) {
        return Route::Forward {
            target: target.clone(),
            args: vec!["-h".to_string()],
        };
    }

    if let Some((first, rest)) = args.split_first() {
        if let Some(target) = table.forward_target(first) {
            return Route::Forward {
                target: target.clone(),
                args: rest.to_vec(),
            };
        }
    }

    let matches = match cli::build_command(table).try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(e) => return Route::Clap(e),
    };

    if let Some((name, sub)) = matches.subcommand() {
        if let Some(target) = table.forward_target(name) {
            let args = sub
                .get_many::<String>(cli::PLUGIN_ARGS)
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            return Route::Forward {
                target: target.clone(),
                args,
            };
        }
    }

    match Cli::from_arg_matches(&matches) {
        Ok(cli) => Route::BuiltIn(cli.command.unwrap_or(Command::List(list::Args::default()))),
        Err(e) => Route::Clap(e),
    }
}

/// 振り分けを実行して終了コードを返す
pub struct Router<'a, R> {
    table: &'a DispatchTable,
    runner: &'a R,
}

impl<'a, R: ProcessRunner> Router<'a, R> {
    pub fn new(table: &'a DispatchTable, runner: &'a R) -> Self {
        Self { table, runner }
    }

    pub async fn dispatch(&self, argv: &[String], ctx: &Context<'_, R>) -> Result<i32> {
        self.dispatch_to(argv, ctx, &mut std::io::stdout(), &mut std::io::stderr())
            .await
    }

    /// 出力先を指定して実行（テスト用に分離）
    pub async fn dispatch_to<O: Write, E: Write>(
        &self,
        argv: &[String],
        ctx: &Context<'_, R>,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<i32> {
        match resolve(self.table, argv) {
            Route::Forward { target, args } => {
                tracing::debug!(command = %target.program, ?args, "forwarding to plugin");
                forward(self.runner, &target, &args, stdout, stderr).await
            }
            Route::BuiltIn(command) => {
                commands::dispatch(command, ctx).await?;
                Ok(0)
            }
            Route::Clap(err) => {
                // 使い方エラーは Fatal、ヘルプとバージョン表示は正常終了
                if err.use_stderr() {
                    write!(stderr, "{}", err.render())?;
                    Ok(1)
                } else {
                    write!(stdout, "{}", err.render())?;
                    Ok(0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
