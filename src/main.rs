use std::path::PathBuf;

use clap::Parser;
use engine_performance_estimator::{app, config, i18n};
use tracing_subscriber::EnvFilter;

/// 내연기관 성능 추정기 (터미널 버전)
#[derive(Debug, Parser)]
#[command(name = "engine_performance_estimator_cli", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어 코드 (auto/ko/en-us)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정에 저장된 입력으로 한 번 계산하고 종료한다
    #[arg(long)]
    once: bool,
    /// --once와 함께 사용: 곡선 데이터를 CSV로 저장
    #[arg(long, requires = "once")]
    export: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        tracing::error!(error = %err, "실행 실패");
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default(&cli.config)?;
    if cli.once {
        app::run_once(&cfg, cli.export.as_deref())?;
        return Ok(());
    }
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &cli.config, &tr)?;
    Ok(())
}
