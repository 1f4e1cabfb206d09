/// forge のホームディレクトリを上書きする環境変数
pub const FORGE_HOME: &str = "FORGE_HOME";
/// インストーラー実行ファイルを上書きする環境変数
pub const FORGE_INSTALLER: &str = "FORGE_INSTALLER";
/// ログフィルタ（EnvFilter 構文）
pub const FORGE_LOG: &str = "FORGE_LOG";
/// エラー表示を詳細モードにする
pub const FORGE_VERBOSE: &str = "FORGE_VERBOSE";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// フラグ系の環境変数が有効か
    ///
    /// `0` / `false` は無効として扱う。
    pub fn is_enabled(key: &str) -> bool {
        Self::get(key)
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
