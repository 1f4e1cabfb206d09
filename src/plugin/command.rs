//! コマンド名の導出

use super::PluginMetadata;
use crate::error::{ForgeError, Result};
use std::fmt;

/// 取り除く実行ファイル拡張子
const EXECUTABLE_SUFFIX: &str = ".exe";

/// プラグインの呼び出し名（ディスパッチテーブルのキー）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommandName(String);

impl CommandName {
    /// 先頭のエントリポイントから拡張子を除いた名前を導出
    ///
    /// エントリポイントが空なら前提条件違反として `Err`。
    pub fn from_metadata(metadata: &PluginMetadata) -> Result<Self> {
        let first = metadata
            .entry_points
            .first()
            .ok_or_else(|| ForgeError::MissingEntryPoint {
                package: metadata.package_name.clone(),
            })?;
        Ok(Self::from_entry_point(first))
    }

    fn from_entry_point(entry_point: &str) -> Self {
        let bare = entry_point
            .strip_suffix(EXECUTABLE_SUFFIX)
            .unwrap_or(entry_point);
        Self(bare.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
