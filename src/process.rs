//! 子プロセス実行の抽象化
//!
//! インストーラー呼び出しとプラグイン転送の両方がこのトレイトを経由する。
//! テスト時は ScriptedRunner を注入する。

use std::process::{ExitStatus, Stdio};

/// 実行するコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
    /// 標準入力を親から引き継ぐか（false なら null）
    pub inherit_stdin: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            inherit_stdin: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn inherit_stdin(mut self) -> Self {
        self.inherit_stdin = true;
        self
    }

    /// ログ表示用のコマンドライン
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 完了した子プロセスの結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// 子プロセスを起動して完了まで待つ
///
/// タイムアウトやキャンセルは持たない。子プロセスが終了しなければ呼び出し側も戻らない。
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> std::io::Result<ProcessOutput>;
}

/// tokio::process による本番実装
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> std::io::Result<ProcessOutput> {
        let mut command = tokio::process::Command::new(&invocation.program);
        command.args(&invocation.args);
        for (key, value) in &invocation.envs {
            command.env(key, value);
        }
        command.stdin(if invocation.inherit_stdin {
            Stdio::inherit()
        } else {
            Stdio::null()
        });

        tracing::debug!(command = %invocation.command_line(), "spawning");
        let output = command.output().await?;
        let code = exit_code(output.status);
        tracing::debug!(command = %invocation.program, code, "process exited");

        Ok(ProcessOutput {
            code,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// 終了コードを取り出す（シグナル終了は 128 + シグナル番号）
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
pub mod mock;
