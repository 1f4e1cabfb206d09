//! テスト用プロセスランナー

use super::*;
use std::collections::VecDeque;
use std::sync::Mutex;

/// 事前に積んだ結果を順番に返し、呼び出しを記録するランナー
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<std::io::Result<ProcessOutput>>>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 終了コードと stdout / stderr を積む
    pub fn push(&self, code: i32, stdout: &str, stderr: &str) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(ProcessOutput {
            code,
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }));
        self
    }

    /// 起動失敗を積む
    pub fn push_spawn_error(&self, kind: std::io::ErrorKind, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(std::io::Error::new(kind, message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// 呼び出しごとの引数列
    pub fn call_args(&self) -> Vec<Vec<String>> {
        self.calls().into_iter().map(|c| c.args).collect()
    }
}

impl ProcessRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> std::io::Result<ProcessOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ProcessOutput::default()))
    }
}
