use anyhow::{Context, Result};
use clap::Parser;
use logprobe_core::{scan_and_write, ScanOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 默认读取的构建日志
const DEFAULT_LOG_PATH: &str = "d:/GravisNC/src/03.App/GCode.App.WPF/build_errors_v3.log";

/// 命令行入口（基于 clap）；只提供 --help/--version，日志路径固定
#[derive(Parser, Debug)]
#[command(name = "logprobe", version, about = "构建日志关键字诊断")]
struct Cli {}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let _cli = Cli::parse();
    let log = PathBuf::from(DEFAULT_LOG_PATH);
    info!(?log, "starting scan");

    // 报告写 stdout，日志写 stderr，互不干扰
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let opts = ScanOptions::default();
    let stats = scan_and_write(&log, &mut out, &opts).context("scan build log failed")?;
    out.flush().context("flush stdout")?;

    info!(
        keywords_found = stats.keywords_found,
        total_occurrences = stats.total_occurrences,
        snippets_written = stats.snippets_written,
        focus_found = stats.focus_found,
        "scan finished"
    );
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
