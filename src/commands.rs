use crate::cli::Command;
use crate::config::ForgeConfig;
use crate::error::{ForgeError, Result};
use crate::installer::{Installer, Operation};
use crate::output::{BatchReport, BatchSummary};
use crate::plugin::PluginCatalog;
use crate::process::ProcessRunner;

pub mod add;
pub mod list;
pub mod remove;
pub mod update;

/// 組み込みコマンドが共有する依存
pub struct Context<'a, R> {
    pub config: &'a ForgeConfig,
    pub catalog: PluginCatalog<'a>,
    pub installer: Installer<'a, R>,
}

pub async fn dispatch<R: ProcessRunner>(command: Command, ctx: &Context<'_, R>) -> Result<()> {
    match command {
        Command::Add(args) => add::run(args, ctx).await,
        Command::Update(args) => update::run(args, ctx).await,
        Command::Remove(args) => remove::run(args, ctx).await,
        Command::List(args) => list::run(args, ctx),
    }
}

/// カタログ全体に対して update / uninstall を順に実行する
///
/// 最初の Fatal で中断し、それまでの内訳を表示してからエラーを返す。
/// Warn は中断しない。
async fn run_batch<R: ProcessRunner>(
    ctx: &Context<'_, R>,
    bulk: Bulk,
    extra: &[String],
) -> Result<BatchReport> {
    let operation = bulk.operation();
    let packages: Vec<String> = ctx
        .catalog
        .list_installed()?
        .into_iter()
        .map(|p| p.package_name)
        .collect();
    tracing::debug!(operation = operation.verb(), count = packages.len(), "starting batch");

    let mut report = BatchReport::default();
    for package in packages {
        let outcome = match bulk {
            Bulk::Update => ctx.installer.update(&package, extra).await,
            Bulk::Remove => ctx.installer.uninstall(&package, extra).await,
        };

        if outcome.is_fatal() {
            report.failed = Some(package.clone());
            BatchSummary::format(operation.verb(), &report).print();
            for line in report.progress_lines() {
                eprintln!("{line}");
            }
            return Err(ForgeError::InstallerFailed {
                operation: operation.verb(),
                target: package,
            });
        }
        if outcome.is_warn() {
            report.warned.push(package);
        } else {
            report.completed.push(package);
        }
    }

    BatchSummary::format(bulk.past_tense(), &report).print();
    Ok(report)
}

/// 名前なしで実行できる一括操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bulk {
    Update,
    Remove,
}

impl Bulk {
    fn operation(self) -> Operation {
        match self {
            Bulk::Update => Operation::Update,
            Bulk::Remove => Operation::Uninstall,
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Bulk::Update => "updated",
            Bulk::Remove => "removed",
        }
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
