//! 外部インストーラーのアダプター
//!
//! install / upgrade / uninstall をサブプロセスとして実行し、出力を分類する。
//! 各操作は進捗スコープで包まれ、どの経路でも終端状態で閉じる。

mod classify;
mod outcome;

pub use classify::Operation;
pub use outcome::InstallationOutcome;

use crate::config::ForgeConfig;
use crate::error::mask_sensitive;
use crate::process::{Invocation, ProcessRunner};
use crate::progress::{ProgressScope, ProgressTarget};

const VERBOSE_FLAG: &str = "--verbose";

/// インストーラーのアダプター
pub struct Installer<'a, R> {
    runner: &'a R,
    config: &'a ForgeConfig,
    progress: ProgressTarget,
}

impl<'a, R: ProcessRunner> Installer<'a, R> {
    pub fn new(runner: &'a R, config: &'a ForgeConfig) -> Self {
        Self {
            runner,
            config,
            progress: ProgressTarget::Stderr,
        }
    }

    #[cfg(test)]
    pub fn with_progress(mut self, progress: ProgressTarget) -> Self {
        self.progress = progress;
        self
    }

    /// ソースからプラグインをインストール
    pub async fn install(&self, source: &str, extra: &[String]) -> InstallationOutcome {
        self.execute(Operation::Install, source, extra, "Installing plugin...".to_string())
            .await
    }

    /// インストール済みパッケージを更新
    pub async fn update(&self, package: &str, extra: &[String]) -> InstallationOutcome {
        let text = format!(
            "Updating plugin: [{}]...",
            self.config.display_name(package)
        );
        self.execute(Operation::Update, package, extra, text).await
    }

    /// インストール済みパッケージを削除
    pub async fn uninstall(&self, package: &str, extra: &[String]) -> InstallationOutcome {
        let text = format!("Uninstalling plugin: [{package}]...");
        self.execute(Operation::Uninstall, package, extra, text).await
    }

    async fn execute(
        &self,
        operation: Operation,
        target: &str,
        extra: &[String],
        progress_text: String,
    ) -> InstallationOutcome {
        let mut scope = ProgressScope::start(progress_text, self.progress);
        let invocation = self.invocation(operation, target, extra);

        let outcome = match self.runner.run(&invocation).await {
            Ok(output) => {
                tracing::debug!(
                    operation = operation.verb(),
                    target,
                    code = output.code,
                    "installer finished"
                );
                classify::classify(operation, target, &self.config.namespace_prefix, &output)
            }
            Err(e) => {
                tracing::debug!(program = %invocation.program, error = %e, "installer failed to start");
                InstallationOutcome::Fatal(format!("{}: {e}", invocation.program))
            }
        };

        match &outcome {
            InstallationOutcome::Success(details) => scope.succeed(details.to_string()),
            InstallationOutcome::AlreadyInstalled => scope.warn(match operation {
                Operation::Update => "Plugin already up to date!".to_string(),
                _ => "Plugin already installed!".to_string(),
            }),
            InstallationOutcome::NotInstalled => scope.warn(match operation {
                Operation::Update => "Plugin not installed! Cannot update!".to_string(),
                _ => format!("Plugin {target} not installed!"),
            }),
            InstallationOutcome::Fatal(reason) => {
                scope.fail(format!("Something went wrong!\n{}", mask_sensitive(reason)))
            }
        }

        outcome
    }

    fn invocation(&self, operation: Operation, target: &str, extra: &[String]) -> Invocation {
        let mut invocation = Invocation::new(&self.config.installer.program)
            .arg(operation.verb())
            .arg(target)
            .arg(VERBOSE_FLAG)
            .args(extra.iter().cloned());
        if let Some(key) = &self.config.installer.home_env {
            invocation = invocation.env(key, self.config.home.to_string_lossy());
        }
        invocation
    }
}

#[cfg(test)]
#[path = "installer_test.rs"]
mod tests;
