//! ログ出力の初期化

use crate::env::{self, EnvVar};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// stderr への fmt レイヤーを設定する
///
/// フィルタは `FORGE_LOG`（EnvFilter 構文）。不正な値は既定値に戻す。
pub fn init() {
    let filter = filter_from(EnvVar::get(env::FORGE_LOG).as_deref());
    // 二重初期化（テスト）は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
