use anyhow::{Context, Result};
use clap::Parser;
use seclint_core::{report, Scanner};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "seclint", version, about = "源码安全规则扫描器")]
struct Cli {
    /// 要扫描的根目录
    #[arg(long)]
    path: PathBuf,
}

fn main() -> Result<ExitCode> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    let mut out = io::stdout().lock();
    writeln!(out, "🔍 starting security scan: {}", cli.path.display())?;

    let mut scanner = Scanner::new(cli.path).context("build scanner")?;
    let stats = scanner.scan();
    report(&mut out, scanner.findings()).context("write report")?;
    out.flush().ok();

    info!(
        files_scanned = stats.files_scanned,
        findings = stats.findings_total,
        "scan finished"
    );

    // High 检出阻断：退出码 1；仅 Medium 或无检出则正常退出
    if stats.high > 0 {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
