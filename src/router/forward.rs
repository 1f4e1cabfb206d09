//! プラグイン実行ファイルへの転送

use super::table::ForwardTarget;
use crate::error::{ForgeError, Result};
use crate::process::{Invocation, ProcessRunner};
use std::io::Write;

/// プラグインを起動し、stdout → stderr の順に中継して終了コードを返す
///
/// 引数は加工せずそのまま渡す。終了コードは変換しない。
pub async fn forward<R, O, E>(
    runner: &R,
    target: &ForwardTarget,
    args: &[String],
    stdout: &mut O,
    stderr: &mut E,
) -> Result<i32>
where
    R: ProcessRunner,
    O: Write,
    E: Write,
{
    let invocation = Invocation::new(target.program.as_str())
        .args(args.iter().cloned())
        .inherit_stdin();

    let output = runner
        .run(&invocation)
        .await
        .map_err(|source| ForgeError::PluginLaunch {
            command: target.program.to_string(),
            source,
        })?;

    stdout.write_all(&output.stdout)?;
    stdout.flush()?;
    stderr.write_all(&output.stderr)?;
    stderr.flush()?;

    tracing::debug!(command = %target.program, code = output.code, "plugin exited");
    Ok(output.code)
}
