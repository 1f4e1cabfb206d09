//! 進捗表示スコープ
//!
//! スピナーは必ず終端状態（成功 / 警告 / 失敗）で閉じる。
//! 未解決のままスコープを抜けた場合は Drop で失敗として閉じる。

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(80);
const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 進捗の出力先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTarget {
    /// stderr にスピナーと結果行を出す
    Stderr,
    /// 何も描画しない
    #[cfg(test)]
    Hidden,
}

/// スコープの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeState {
    Running,
    Succeeded,
    Warned,
    Failed,
}

/// 必ず終端状態で閉じるスピナー
pub struct ProgressScope {
    bar: ProgressBar,
    target: ProgressTarget,
    state: ScopeState,
}

impl ProgressScope {
    pub fn start(text: impl Into<String>, target: ProgressTarget) -> Self {
        let bar = match target {
            ProgressTarget::Stderr => {
                let bar = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
                    // 最後の要素は終了時のフレーム
                    let frames: Vec<&str> = DOTS.iter().copied().chain([""]).collect();
                    bar.set_style(style.tick_strings(&frames));
                }
                bar.enable_steady_tick(TICK_INTERVAL);
                bar
            }
            #[cfg(test)]
            ProgressTarget::Hidden => ProgressBar::hidden(),
        };
        bar.set_message(text.into());

        Self {
            bar,
            target,
            state: ScopeState::Running,
        }
    }

    pub fn succeed(&mut self, message: impl AsRef<str>) {
        self.resolve(ScopeState::Succeeded, message.as_ref());
    }

    pub fn warn(&mut self, message: impl AsRef<str>) {
        self.resolve(ScopeState::Warned, message.as_ref());
    }

    pub fn fail(&mut self, message: impl AsRef<str>) {
        self.resolve(ScopeState::Failed, message.as_ref());
    }

    #[cfg(test)]
    pub fn state(&self) -> ScopeState {
        self.state
    }

    fn resolve(&mut self, state: ScopeState, message: &str) {
        if self.state != ScopeState::Running {
            return;
        }
        self.state = state;
        self.bar.finish_and_clear();

        if !self.draws() {
            return;
        }
        let symbol = match state {
            ScopeState::Succeeded => "✔".green().to_string(),
            ScopeState::Warned => "⚠".yellow().to_string(),
            ScopeState::Failed | ScopeState::Running => "✖".red().to_string(),
        };
        eprintln!("{symbol} {message}");
    }

    fn draws(&self) -> bool {
        match self.target {
            ProgressTarget::Stderr => true,
            #[cfg(test)]
            ProgressTarget::Hidden => false,
        }
    }

    #[cfg(test)]
    fn bar(&self) -> ProgressBar {
        self.bar.clone()
    }
}

impl Drop for ProgressScope {
    fn drop(&mut self) {
        if self.state == ScopeState::Running {
            let text = self.bar.message();
            self.fail(format!("{text} interrupted"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        let scope = ProgressScope::start("Installing plugin...", ProgressTarget::Hidden);
        assert_eq!(scope.state(), ScopeState::Running);
    }

    #[test]
    fn succeed_finishes_bar() {
        let mut scope = ProgressScope::start("Installing plugin...", ProgressTarget::Hidden);
        let bar = scope.bar();
        scope.succeed("done");

        assert_eq!(scope.state(), ScopeState::Succeeded);
        assert!(bar.is_finished());
    }

    #[test]
    fn first_resolution_wins() {
        let mut scope = ProgressScope::start("x", ProgressTarget::Hidden);
        scope.warn("already installed");
        scope.succeed("ignored");
        scope.fail("ignored");

        assert_eq!(scope.state(), ScopeState::Warned);
    }

    #[test]
    fn drop_resolves_unfinished_scope() {
        let scope = ProgressScope::start("Updating plugin: [a]...", ProgressTarget::Hidden);
        let bar = scope.bar();
        drop(scope);

        assert!(bar.is_finished());
    }

    #[test]
    fn panic_inside_scope_still_resolves() {
        let scope = ProgressScope::start("x", ProgressTarget::Hidden);
        let bar = scope.bar();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _scope = scope;
            panic!("boom");
        }));

        assert!(result.is_err());
        assert!(bar.is_finished());
    }
}
