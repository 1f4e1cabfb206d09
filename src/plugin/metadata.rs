//! インストーラーメタデータの読み取り
//!
//! venv ごとの `pipx_metadata.json` を解析する。形状は
//! `{"main_package": {"package": ..., "package_version": ..., "apps": [...]}}`。
//! forge はこのファイルを読み取るだけで、書き換えない。

use serde::Deserialize;

/// バージョン欠損時の表示値
const UNKNOWN_VERSION: &str = "unknown";

/// インストール済みプラグイン1件のメタデータ（読み取り時点のスナップショット）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginMetadata {
    pub package_name: String,
    pub version: String,
    /// 宣言された実行ファイル名（先頭が正）
    pub entry_points: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    main_package: Option<RawPackage>,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    package: Option<String>,
    package_version: Option<String>,
    #[serde(default)]
    apps: Vec<String>,
}

/// メタデータを解析する
///
/// - 空文字列・不正な JSON は `Err`（インストーラー側の破損として扱う）
/// - JSON として正しいが `main_package` / `package` / `apps` が欠けているものは
///   `Ok(None)`（無効なエントリとしてカタログから除外する）
pub fn parse_metadata(content: &str) -> Result<Option<PluginMetadata>, String> {
    if content.trim().is_empty() {
        return Err("metadata file is empty".to_string());
    }

    let raw: RawMetadata = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let Some(main) = raw.main_package else {
        return Ok(None);
    };
    let Some(package_name) = main.package.filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    if main.apps.is_empty() {
        return Ok(None);
    }

    Ok(Some(PluginMetadata {
        package_name,
        version: main
            .package_version
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
        entry_points: main.apps,
    }))
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
