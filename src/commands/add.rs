//! forge add コマンド
//!
//! ソースを指定してプラグインをインストールする。

use super::Context;
use crate::error::{ForgeError, Result};
use crate::process::ProcessRunner;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Plugin source understood by the installer (package name, path or VCS URL)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Extra arguments passed to the installer unchanged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

pub async fn run<R: ProcessRunner>(args: Args, ctx: &Context<'_, R>) -> Result<()> {
    let source = args.source.ok_or(ForgeError::MissingSource)?;

    ctx.installer
        .install(&source, &args.extra)
        .await
        .into_result("install", &source)?;
    Ok(())
}
