//! forge update コマンド
//!
//! 名前を指定すればそのプラグインのみ、省略すればインストール済みの全プラグインを更新する。

use super::{run_batch, Bulk, Context};
use crate::error::Result;
use crate::process::ProcessRunner;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Plugin to update (prefix optional); all plugins when omitted
    #[arg(short, long)]
    pub name: Option<String>,

    /// Extra arguments passed to the installer unchanged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

pub async fn run<R: ProcessRunner>(args: Args, ctx: &Context<'_, R>) -> Result<()> {
    match args.name {
        Some(name) => {
            let package = ctx.config.qualify(&name);
            ctx.installer
                .update(&package, &args.extra)
                .await
                .into_result("upgrade", &package)?;
        }
        None => {
            run_batch(ctx, Bulk::Update, &args.extra).await?;
        }
    }
    Ok(())
}
