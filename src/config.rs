//! forge 設定
//!
//! プロセス起動時に一度だけ構築し、ファイルシステム上の場所を必要とする
//! すべてのコンポーネントへ参照で渡す。グローバルな設定参照は持たない。

use crate::env::{self, EnvVar};
use crate::error::{ForgeError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// forge ホーム配下の設定ファイル名
pub const CONFIG_FILE: &str = "config.toml";

const DEFAULT_PREFIX: &str = "forge-";
const DEFAULT_METADATA_FILE: &str = "pipx_metadata.json";
const DEFAULT_VENV_DIR: &str = "venvs";
const DEFAULT_INSTALLER: &str = "pipx";
const DEFAULT_INSTALLER_HOME_ENV: &str = "PIPX_HOME";

/// 外部インストーラーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    /// 実行ファイル名（PATH から解決）
    pub program: String,
    /// forge ホームを渡す環境変数名
    pub home_env: Option<String>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_INSTALLER.to_string(),
            home_env: Some(DEFAULT_INSTALLER_HOME_ENV.to_string()),
        }
    }
}

/// forge 全体の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    /// forge ホームディレクトリ（既定: `~/.forge`）
    pub home: PathBuf,
    /// プラグインごとの venv が置かれるディレクトリ
    pub plugin_dir: PathBuf,
    /// venv ごとのメタデータファイル名
    pub metadata_file: String,
    /// forge プラグインのパッケージ名プレフィックス
    pub namespace_prefix: String,
    pub installer: InstallerConfig,
}

/// `config.toml` の内容（すべて任意）
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    plugin_dir: Option<PathBuf>,
    namespace_prefix: Option<String>,
    installer: Option<InstallerSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct InstallerSection {
    program: Option<String>,
    home_env: Option<String>,
}

impl ForgeConfig {
    /// 既定値で構築
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            plugin_dir: home.join(DEFAULT_VENV_DIR),
            home,
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
            namespace_prefix: DEFAULT_PREFIX.to_string(),
            installer: InstallerConfig::default(),
        }
    }

    /// 環境変数と設定ファイルから構築
    ///
    /// 優先順位: 環境変数 > config.toml > 既定値
    pub fn load() -> Result<Self> {
        let home = Self::resolve_home()?;
        let file_path = home.join(CONFIG_FILE);
        let contents = match std::fs::read_to_string(&file_path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let mut config = Self::from_parts(home, contents.as_deref(), &file_path)?;
        if let Some(program) = EnvVar::get(env::FORGE_INSTALLER) {
            config.installer.program = program;
        }

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// ホームディレクトリと設定ファイル内容から構築（テスト用に分離）
    fn from_parts(home: PathBuf, contents: Option<&str>, file_path: &Path) -> Result<Self> {
        let mut config = Self::with_home(home);
        let Some(contents) = contents else {
            return Ok(config);
        };

        let file: ConfigFile = toml::from_str(contents).map_err(|e| ForgeError::InvalidConfig {
            path: file_path.to_path_buf(),
            message: e.message().to_string(),
        })?;

        if let Some(dir) = file.plugin_dir {
            // 相対パスはホーム基準
            config.plugin_dir = config.home.join(dir);
        }
        if let Some(prefix) = file.namespace_prefix.filter(|p| !p.is_empty()) {
            config.namespace_prefix = prefix;
        }
        if let Some(installer) = file.installer {
            if let Some(program) = installer.program {
                config.installer.program = program;
            }
            if let Some(home_env) = installer.home_env {
                config.installer.home_env = Some(home_env).filter(|v| !v.is_empty());
            }
        }

        Ok(config)
    }

    fn resolve_home() -> Result<PathBuf> {
        if let Some(home) = EnvVar::get(env::FORGE_HOME) {
            return Ok(PathBuf::from(home));
        }
        EnvVar::get("HOME")
            .map(|home| PathBuf::from(home).join(".forge"))
            .ok_or_else(|| {
                ForgeError::HomeNotFound("HOME environment variable not set".to_string())
            })
    }

    /// プラグイン名にプレフィックスを付与（付与済みならそのまま）
    pub fn qualify(&self, name: &str) -> String {
        if name.starts_with(&self.namespace_prefix) {
            name.to_string()
        } else {
            format!("{}{}", self.namespace_prefix, name)
        }
    }

    /// パッケージ名から先頭のプレフィックスを一度だけ除去
    pub fn display_name<'a>(&self, package: &'a str) -> &'a str {
        package
            .strip_prefix(self.namespace_prefix.as_str())
            .unwrap_or(package)
    }

    /// forge プラグインのパッケージか
    pub fn is_forge_package(&self, package: &str) -> bool {
        package.starts_with(&self.namespace_prefix)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
