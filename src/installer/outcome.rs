//! インストーラー操作の結果

use crate::error::{ForgeError, Result};
use std::fmt;

/// インストール直後に解析できたパッケージ情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    /// プレフィックスを除いたプラグイン名
    pub plugin_name: String,
    pub package: String,
    /// インストーラーが報告したランタイムのバージョン
    pub runtime_version: String,
}

/// 成功時の詳細
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuccessDetails {
    Installed(InstalledPackage),
    Updated { summary: String },
    Uninstalled { package: String },
}

impl fmt::Display for SuccessDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuccessDetails::Installed(p) => write!(
                f,
                "Installed plugin: [{}] [{}] [{}]!",
                p.plugin_name, p.package, p.runtime_version
            ),
            SuccessDetails::Updated { summary } => f.write_str(summary),
            SuccessDetails::Uninstalled { package } => {
                write!(f, "Uninstalled plugin: [{package}]!")
            }
        }
    }
}

/// インストーラー操作1回分の分類結果
///
/// `AlreadyInstalled` と `NotInstalled` は Warn（終了コード 0）、
/// `Fatal` のみが失敗として扱われる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallationOutcome {
    Success(SuccessDetails),
    AlreadyInstalled,
    NotInstalled,
    Fatal(String),
}

impl InstallationOutcome {
    pub fn is_fatal(&self) -> bool {
        matches!(self, InstallationOutcome::Fatal(_))
    }

    pub fn is_warn(&self) -> bool {
        matches!(
            self,
            InstallationOutcome::AlreadyInstalled | InstallationOutcome::NotInstalled
        )
    }

    /// Fatal のみをエラーへ変換する
    pub fn into_result(self, operation: &'static str, target: &str) -> Result<Self> {
        match self {
            InstallationOutcome::Fatal(_) => Err(ForgeError::InstallerFailed {
                operation,
                target: target.to_string(),
            }),
            other => Ok(other),
        }
    }
}
