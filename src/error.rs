mod code;
mod formatter;
mod rich;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub(crate) use formatter::mask_sensitive;
pub use rich::{ErrorContext, RichError};

use std::path::PathBuf;
use thiserror::Error;

/// forge 統一エラー型
///
/// すべて Fatal 扱い（終了コード 1）。Warn 相当の結果はエラーではなく
/// `InstallationOutcome` として返す。
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Cannot locate forge home: {0}")]
    HomeNotFound(String),

    #[error("Problem reading json file expected at {}", path.display())]
    MetadataUnreadable { path: PathBuf, reason: String },

    #[error("Plugin '{package}' declares no executable entry points")]
    MissingEntryPoint { package: String },

    #[error("Failed to launch plugin command '{command}'")]
    PluginLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{operation} failed for '{target}'")]
    InstallerFailed {
        operation: &'static str,
        target: String,
    },

    #[error("Missing option '--source' / '-s'")]
    MissingSource,

    #[error("{0}")]
    InvalidArguments(String),
}

pub type Result<T> = std::result::Result<T, ForgeError>;

impl ForgeError {
    /// 対応するエラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            ForgeError::Io(_) => ErrorCode::Io001,
            ForgeError::InvalidConfig { .. } => ErrorCode::Cfg001,
            ForgeError::HomeNotFound(_) => ErrorCode::Cfg002,
            ForgeError::MetadataUnreadable { .. } => ErrorCode::Plg001,
            ForgeError::MissingEntryPoint { .. } => ErrorCode::Plg002,
            ForgeError::PluginLaunch { .. } => ErrorCode::Plg003,
            ForgeError::InstallerFailed { .. } => ErrorCode::Ins001,
            ForgeError::MissingSource => ErrorCode::Val001,
            ForgeError::InvalidArguments(_) => ErrorCode::Val002,
        }
    }

    /// 表示用の RichError に変換
    pub fn into_rich(self) -> RichError {
        let code = self.code();
        let message = self.to_string();
        match self {
            ForgeError::Io(err) => RichError::new(code, message).with_source(err),
            ForgeError::InvalidConfig { path, .. } => {
                RichError::new(code, message).with_context(ErrorContext::new().with_file_path(path))
            }
            ForgeError::MetadataUnreadable { path, reason } => RichError::new(code, message)
                .with_context(
                    ErrorContext::new()
                        .with_file_path(path)
                        .with_additional("reason", reason),
                ),
            ForgeError::MissingEntryPoint { package } => RichError::new(code, message)
                .with_context(ErrorContext::new().with_plugin_name(package)),
            ForgeError::PluginLaunch { command, source } => RichError::new(code, message)
                .with_context(ErrorContext::new().with_plugin_name(command))
                .with_source(source),
            ForgeError::InstallerFailed { target, .. } => RichError::new(code, message)
                .with_context(ErrorContext::new().with_plugin_name(target)),
            _ => RichError::new(code, message),
        }
    }
}
