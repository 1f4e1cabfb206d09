//! ヘルプ要求の横取り
//!
//! プラグイン名の直後の `-h` / `--help` は、forge のヘルプではなく
//! プラグイン自身のヘルプを表示させるため転送する。
//! それより後ろのフラグはプラグインの引数なので argv のまま渡す。

use super::table::{DispatchTable, ForwardTarget};

const HELP_FLAGS: &[&str] = &["-h", "--help"];
const END_OF_OPTIONS: &str = "--";

/// ヘルプ要求の振り分け
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpRequest<'t> {
    /// プラグインに `-h` を渡して自身のヘルプを表示させる
    ForwardToPlugin(&'t ForwardTarget),
    /// clap によるヘルプ（トップレベルまたは組み込みコマンド）
    Native,
    NotRequested,
}

/// プログラム名を除いた引数列を検査する
pub fn intercept<'t>(args: &[String], table: &'t DispatchTable) -> HelpRequest<'t> {
    let Some((first, rest)) = args.split_first() else {
        return HelpRequest::NotRequested;
    };
    if is_help_flag(first) {
        return HelpRequest::Native;
    }

    if let Some(target) = table.forward_target(first) {
        return match rest.first() {
            Some(flag) if is_help_flag(flag) => HelpRequest::ForwardToPlugin(target),
            _ => HelpRequest::NotRequested,
        };
    }

    let requested = rest
        .iter()
        .take_while(|arg| arg.as_str() != END_OF_OPTIONS)
        .any(|arg| is_help_flag(arg));
    if requested {
        HelpRequest::Native
    } else {
        HelpRequest::NotRequested
    }
}

fn is_help_flag(arg: &str) -> bool {
    HELP_FLAGS.contains(&arg)
}
