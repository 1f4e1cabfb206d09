//! 端末出力の整形

use owo_colors::OwoColorize;

/// 警告行を stderr に出す
pub fn warn_line(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// 一括操作の途中経過
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// 成功したパッケージ
    pub completed: Vec<String>,
    /// Warn で終わったパッケージ
    pub warned: Vec<String>,
    /// Fatal で中断したパッケージ
    pub failed: Option<String>,
}

impl BatchReport {
    /// 中断時に表示する内訳
    pub fn progress_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.completed.is_empty() {
            lines.push(format!("  completed: {}", self.completed.join(", ")));
        }
        if !self.warned.is_empty() {
            lines.push(format!("  skipped: {}", self.warned.join(", ")));
        }
        if let Some(failed) = &self.failed {
            lines.push(format!("  failed: {failed}"));
        }
        lines
    }
}

/// 一括操作の1行サマリー
pub struct BatchSummary {
    pub prefix: String,
    pub message: String,
}

impl BatchSummary {
    pub fn format(verb: &str, report: &BatchReport) -> Self {
        let done = report.completed.len();
        let skipped = report.warned.len();
        match report.failed.as_deref() {
            Some(failed) => Self {
                prefix: "✖".red().to_string(),
                message: format!(
                    "{verb} aborted at {}: {} done, {} skipped before the failure",
                    failed.red(),
                    done.green(),
                    skipped.yellow()
                ),
            },
            None if done + skipped > 0 => Self {
                prefix: "✔".green().to_string(),
                message: format!("{} plugin(s) {verb}, {} skipped", done.green(), skipped.yellow()),
            },
            None => Self {
                prefix: "•".yellow().to_string(),
                message: "No forge plugins installed".to_string(),
            },
        }
    }

    pub fn print(&self) {
        eprintln!("{} {}", self.prefix, self.message);
    }
}
