//! プラグインカタログ
//!
//! インストーラーの venv ディレクトリを走査し、forge プラグインの一覧を返す。

use super::{parse_metadata, PluginMetadata};
use crate::config::ForgeConfig;
use crate::error::{ForgeError, Result};
use crate::fs::{FileSystem, FsFileType};

/// インストール済みプラグインのカタログ
pub struct PluginCatalog<'a> {
    fs: &'a dyn FileSystem,
    config: &'a ForgeConfig,
}

impl<'a> PluginCatalog<'a> {
    pub fn new(fs: &'a dyn FileSystem, config: &'a ForgeConfig) -> Self {
        Self { fs, config }
    }

    /// インストール済みの forge プラグインを列挙
    ///
    /// 順序はディレクトリ走査順（プラットフォーム依存）で、ソートはしない。
    /// venv ルートが存在しない場合は空（初回起動時）。
    pub fn list_installed(&self) -> Result<Vec<PluginMetadata>> {
        let root = &self.config.plugin_dir;
        if !self.fs.exists(root) {
            tracing::debug!(path = %root.display(), "plugin directory does not exist yet");
            return Ok(Vec::new());
        }

        let mut plugins = Vec::new();
        for entry in self.fs.read_dir(root)? {
            let is_dir = entry.is_dir()
                || (entry.file_type == FsFileType::Symlink && self.fs.is_dir(&entry.path));
            if !is_dir {
                continue;
            }

            let metadata_path = entry.path.join(&self.config.metadata_file);
            let content = self.fs.read_to_string(&metadata_path).map_err(|e| {
                ForgeError::MetadataUnreadable {
                    path: entry.path.clone(),
                    reason: e.to_string(),
                }
            })?;

            match parse_metadata(&content) {
                Ok(Some(metadata)) => plugins.push(metadata),
                Ok(None) => {
                    tracing::warn!(
                        path = %metadata_path.display(),
                        "skipping installer metadata without package name or apps"
                    );
                }
                Err(reason) => {
                    return Err(ForgeError::MetadataUnreadable {
                        path: entry.path.clone(),
                        reason,
                    });
                }
            }
        }

        let total = plugins.len();
        let forge_plugins = filter_forge_plugins(plugins, self.config);
        tracing::debug!(total, forge = forge_plugins.len(), "scanned plugin directory");
        Ok(forge_plugins)
    }
}

/// ネームスペース外のパッケージを除外
fn filter_forge_plugins(plugins: Vec<PluginMetadata>, config: &ForgeConfig) -> Vec<PluginMetadata> {
    plugins
        .into_iter()
        .filter(|p| config.is_forge_package(&p.package_name))
        .collect()
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
