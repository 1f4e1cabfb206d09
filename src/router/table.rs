//! ディスパッチテーブル
//!
//! 起動時に一度だけ構築し、以後は変更しない。
//! `DispatchTable::builder()` が返す `Registrar` が登録中の状態を表し、
//! `register_all` を経て初めて `DispatchTable` が得られる。

use crate::plugin::{CommandName, PluginMetadata};
use std::collections::BTreeMap;

/// 組み込みコマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltIn {
    Add,
    Update,
    Remove,
    List,
}

impl BuiltIn {
    pub const ALL: [BuiltIn; 4] = [BuiltIn::Add, BuiltIn::Update, BuiltIn::Remove, BuiltIn::List];

    pub fn name(self) -> &'static str {
        match self {
            BuiltIn::Add => "add",
            BuiltIn::Update => "update",
            BuiltIn::Remove => "remove",
            BuiltIn::List => "list",
        }
    }
}

/// プラグインが使えない名前（組み込み + clap の help）
const RESERVED: &[&str] = &["add", "update", "remove", "list", "help"];

/// 転送先の外部コマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardTarget {
    /// PATH 上で解決される実行ファイル名
    pub program: CommandName,
    /// 由来するパッケージ名
    pub package: String,
}

/// テーブルの1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEntry {
    BuiltIn(BuiltIn),
    Forward(ForwardTarget),
}

/// 登録中のテーブル
#[derive(Debug)]
pub struct Registrar {
    entries: BTreeMap<String, DispatchEntry>,
}

/// 登録完了後の不変テーブル
#[derive(Debug, Clone)]
pub struct DispatchTable {
    entries: BTreeMap<String, DispatchEntry>,
}

impl DispatchTable {
    /// 組み込みコマンドのみを含む登録器を作る
    pub fn builder() -> Registrar {
        let entries = BuiltIn::ALL
            .into_iter()
            .map(|b| (b.name().to_string(), DispatchEntry::BuiltIn(b)))
            .collect();
        Registrar { entries }
    }

    pub fn get(&self, name: &str) -> Option<&DispatchEntry> {
        self.entries.get(name)
    }

    /// 名前がプラグインへの転送エントリならその転送先
    pub fn forward_target(&self, name: &str) -> Option<&ForwardTarget> {
        match self.get(name) {
            Some(DispatchEntry::Forward(target)) => Some(target),
            _ => None,
        }
    }

    /// 登録済みプラグインの転送先（名前順）
    pub fn plugins(&self) -> impl Iterator<Item = &ForwardTarget> {
        self.entries.values().filter_map(|entry| match entry {
            DispatchEntry::Forward(target) => Some(target),
            DispatchEntry::BuiltIn(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Registrar {
    /// カタログの全エントリを登録して Ready 状態へ遷移する
    ///
    /// 予約名と衝突するもの、既に登録済みの名前は登録しない（先勝ち）。
    /// エントリポイントのないメタデータは前提条件違反としてエラーにする。
    pub fn register_all(
        mut self,
        plugins: &[PluginMetadata],
    ) -> crate::error::Result<DispatchTable> {
        for metadata in plugins {
            let name = CommandName::from_metadata(metadata)?;
            self.register(name, &metadata.package_name);
        }
        Ok(self.finish())
    }

    /// 組み込みのみで Ready にする
    pub fn finish(self) -> DispatchTable {
        let table = DispatchTable {
            entries: self.entries,
        };
        tracing::debug!(commands = table.len(), "dispatch table ready");
        table
    }

    fn register(&mut self, name: CommandName, package: &str) {
        if RESERVED.contains(&name.as_str()) {
            tracing::warn!(
                command = %name,
                package,
                "plugin command collides with a built-in command and is ignored"
            );
            return;
        }
        if let Some(existing) = self.entries.get(name.as_str()) {
            tracing::warn!(command = %name, package, ?existing, "duplicate plugin command ignored");
            return;
        }

        tracing::debug!(command = %name, package, "registered plugin command");
        self.entries.insert(
            name.as_str().to_string(),
            DispatchEntry::Forward(ForwardTarget {
                program: name,
                package: package.to_string(),
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForgeError;

    fn metadata(package: &str, apps: &[&str]) -> PluginMetadata {
        PluginMetadata {
            package_name: package.to_string(),
            version: "1.0.0".to_string(),
            entry_points: apps.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn builder_contains_built_ins_only() {
        let table = DispatchTable::builder().finish();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("list"), Some(&DispatchEntry::BuiltIn(BuiltIn::List)));
        assert_eq!(table.plugins().count(), 0);
    }

    #[test]
    fn registers_plugin_commands() {
        let table = DispatchTable::builder()
            .register_all(&[metadata("forge-plugin1", &["plugin1.exe"])])
            .unwrap();

        let target = table.forward_target("plugin1").unwrap();
        assert_eq!(target.program.as_str(), "plugin1");
        assert_eq!(target.package, "forge-plugin1");
    }

    #[test]
    fn built_ins_cannot_be_shadowed() {
        let table = DispatchTable::builder()
            .register_all(&[
                metadata("forge-list", &["list"]),
                metadata("forge-remove", &["remove.exe"]),
                metadata("forge-help", &["help"]),
            ])
            .unwrap();

        assert_eq!(table.get("list"), Some(&DispatchEntry::BuiltIn(BuiltIn::List)));
        assert_eq!(table.get("remove"), Some(&DispatchEntry::BuiltIn(BuiltIn::Remove)));
        assert!(table.get("help").is_none());
        assert_eq!(table.plugins().count(), 0);
    }

    #[test]
    fn first_duplicate_wins() {
        let table = DispatchTable::builder()
            .register_all(&[
                metadata("forge-a", &["tool"]),
                metadata("forge-b", &["tool.exe"]),
            ])
            .unwrap();

        assert_eq!(table.forward_target("tool").unwrap().package, "forge-a");
        assert_eq!(table.plugins().count(), 1);
    }

    #[test]
    fn missing_entry_point_is_fatal() {
        let err = DispatchTable::builder()
            .register_all(&[metadata("forge-empty", &[])])
            .unwrap_err();
        assert!(matches!(err, ForgeError::MissingEntryPoint { .. }));
    }

    #[test]
    fn built_in_is_not_a_forward_target() {
        let table = DispatchTable::builder().finish();
        assert!(table.forward_target("add").is_none());
        assert!(table.forward_target("unknown").is_none());
    }
}
