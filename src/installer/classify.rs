//! インストーラー出力の分類
//!
//! インストーラーの契約は「終了コード + 自由形式テキスト」のみ。
//! 認識できるマーカー文字列はここに列挙し、それ以外の非ゼロ終了は Fatal とする。

use super::outcome::{InstallationOutcome, InstalledPackage, SuccessDetails};
use crate::process::ProcessOutput;
use regex::Regex;
use std::sync::LazyLock;

/// 再インストール時に出る無害な stderr
const BENIGN_STDERR: &[&str] = &[
    "(_copy_package_apps:66):   Overwriting file",
    "(_symlink_package_apps:95): Same path",
];

const ALREADY_INSTALLED: &str = "already seems to be installed";
const PACKAGE_NOT_INSTALLED: &str = "Package is not installed";
const IS_NOT_INSTALLED: &str = "is not installed";
const ALREADY_LATEST: &str = "is already at latest version";
const NOTHING_TO_UNINSTALL: &str = "Nothing to uninstall for";

const INSTALL_INFO_MISSING: &str = "Failed to find package information install log!";
const UPDATE_INFO_MISSING: &str = "Failed to find update information from update log!";

const EXECUTABLE_SUFFIX: &str = ".exe";

/// `installed package <package>,<version>` の後、いずれかの行の `-<name>`
static INSTALLED_PACKAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"installed package(.*),(.*)\n(?:.*\n)+?.*?-(.*)").expect("valid regex")
});

/// インストーラーの操作種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Install,
    Update,
    Uninstall,
}

impl Operation {
    /// インストーラーに渡す動詞
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Install => "install",
            Operation::Update => "upgrade",
            Operation::Uninstall => "uninstall",
        }
    }
}

/// 出力を分類する
///
/// 判定順:
/// 1. 操作ごとの Warn マーカー（update / uninstall は対象パッケージ名に固定）
/// 2. 非ゼロ終了で無害マーカーを含まない stderr は Fatal
/// 3. 操作ごとの成功情報の抽出
pub fn classify(
    operation: Operation,
    target: &str,
    prefix: &str,
    output: &ProcessOutput,
) -> InstallationOutcome {
    let stdout = output.stdout_text();
    let stderr = output.stderr_text();
    if let Some(warn) = warn_marker(operation, target, &stdout, &stderr) {
        return warn;
    }

    if !output.success() && !is_benign(&stderr) {
        let reason = stderr.trim();
        return InstallationOutcome::Fatal(if reason.is_empty() {
            format!("installer exited with code {}", output.code)
        } else {
            reason.to_string()
        });
    }

    match operation {
        Operation::Install => parse_install(&stdout),
        Operation::Update => parse_update(&stdout, prefix),
        Operation::Uninstall => InstallationOutcome::Success(SuccessDetails::Uninstalled {
            package: target.to_string(),
        }),
    }
}

fn warn_marker(
    operation: Operation,
    target: &str,
    stdout: &str,
    stderr: &str,
) -> Option<InstallationOutcome> {
    match operation {
        Operation::Install
            if stdout.contains(ALREADY_INSTALLED) || stderr.contains(ALREADY_INSTALLED) =>
        {
            Some(InstallationOutcome::AlreadyInstalled)
        }
        Operation::Update if update_not_installed(target, stderr) => {
            Some(InstallationOutcome::NotInstalled)
        }
        Operation::Update if contains_phrase(stdout, &format!("{target} {ALREADY_LATEST}")) => {
            Some(InstallationOutcome::AlreadyInstalled)
        }
        Operation::Uninstall
            if contains_phrase(stdout, &format!("{NOTHING_TO_UNINSTALL} {target}")) =>
        {
            Some(InstallationOutcome::NotInstalled)
        }
        _ => None,
    }
}

/// 対象パッケージ自体が未インストールだというインストーラーのメッセージ
///
/// 依存パッケージについての `... as it is not installed.` は該当しない。
fn update_not_installed(target: &str, stderr: &str) -> bool {
    [
        PACKAGE_NOT_INSTALLED.to_string(),
        format!("Package {target} {IS_NOT_INSTALLED}"),
        format!("Package '{target}' {IS_NOT_INSTALLED}"),
        format!("'{target}' {IS_NOT_INSTALLED}"),
    ]
    .iter()
    .any(|phrase| contains_phrase(stderr, phrase))
}

/// `phrase` が前後をパッケージ名の一部と連続せずに現れるか
///
/// `forge-f` を探すときに `forge-foo` や `xforge-f` を一致とみなさない。
/// 直後の `.` は英数字が続くときだけ名前の一部とみなす（文末の句点は区切り）。
fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.match_indices(phrase).any(|(start, matched)| {
        let before = text[..start].chars().next_back();
        let mut after = text[start + matched.len()..].chars();
        let continues = match after.next() {
            Some('.') => after.next().is_some_and(char::is_alphanumeric),
            next => next.is_some_and(is_package_char),
        };
        !before.is_some_and(is_package_char) && !continues
    })
}

fn is_benign(stderr: &str) -> bool {
    BENIGN_STDERR.iter().any(|m| stderr.contains(m))
}

fn is_package_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.')
}

fn parse_install(stdout: &str) -> InstallationOutcome {
    let Some(caps) = INSTALLED_PACKAGE.captures(stdout) else {
        return InstallationOutcome::Fatal(INSTALL_INFO_MISSING.to_string());
    };

    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).trim();
    let name = group(3);
    let name = name.strip_suffix(EXECUTABLE_SUFFIX).unwrap_or(name);

    InstallationOutcome::Success(SuccessDetails::Installed(InstalledPackage {
        plugin_name: name.to_string(),
        package: group(1).to_string(),
        runtime_version: group(2).to_string(),
    }))
}

fn parse_update(stdout: &str, prefix: &str) -> InstallationOutcome {
    let pattern = format!(r"(.*{}.*)\(", regex::escape(prefix));
    let Ok(re) = Regex::new(&pattern) else {
        return InstallationOutcome::Fatal(UPDATE_INFO_MISSING.to_string());
    };

    let Some(last) = re
        .captures_iter(stdout)
        .filter_map(|caps| caps.get(1))
        .last()
    else {
        return InstallationOutcome::Fatal(UPDATE_INFO_MISSING.to_string());
    };

    let summary = last.as_str().trim().replacen(prefix, "", 1);
    InstallationOutcome::Success(SuccessDetails::Updated { summary })
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
