//! # settings-app
//!
//! 설정 리소스 CLI 진입점.
//! 설정 로드, 클라이언트 와이어링, 명령 실행과 알림 출력.

mod commands;
mod notifications;

use anyhow::{anyhow, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use settings_core::config::ClientConfig;
use settings_core::models::settings::ListQuery;
use settings_core::ports::settings_api::SettingsApi;
use settings_network::client::HttpSettingsClient;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::{DocumentInput, Outcome};

/// 설정 리소스 클라이언트
#[derive(Parser, Debug)]
#[command(name = "settings")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// API 서버 URL (기본: PUBLIC_API_URL 또는 http://localhost:3000)
    #[arg(long, short = 's')]
    api_url: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 설정 목록
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u64>,
    },
    /// 설정 단건 조회
    Get { id: String },
    /// 새 설정 생성
    Create(DocumentArgs),
    /// 설정 전체 교체
    Update {
        id: String,
        #[command(flatten)]
        document: DocumentArgs,
    },
    /// 설정 삭제
    Delete { id: String },
    /// 문서 유효성만 확인 (요청 없음)
    Check(DocumentArgs),
}

/// 문서 입력 (인라인 JSON 또는 파일)
#[derive(ClapArgs, Debug)]
struct DocumentArgs {
    /// JSON 문서 텍스트
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    json: Option<String>,

    /// JSON 문서 파일 경로
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,
}

impl DocumentArgs {
    fn into_input(self) -> Result<DocumentInput> {
        match (self.json, self.file) {
            (Some(json), None) => Ok(DocumentInput::Inline(json)),
            (None, Some(path)) => Ok(DocumentInput::File(path)),
            _ => Err(anyhow!("JSON 문서 또는 --file 중 하나를 지정해야 합니다")),
        }
    }
}

async fn run(api: Arc<dyn SettingsApi>, command: Command) -> Result<Outcome> {
    let outcome = match command {
        Command::List { limit, offset } => {
            commands::list(api.as_ref(), ListQuery::new(limit, offset)).await
        }
        Command::Get { id } => commands::show(api.as_ref(), &id).await,
        Command::Create(document) => {
            let draft = document.into_input()?.into_draft()?;
            commands::create(api.as_ref(), &draft).await
        }
        Command::Update { id, document } => {
            let draft = document.into_input()?.into_draft()?;
            commands::update(api.as_ref(), &id, &draft).await
        }
        Command::Delete { id } => commands::delete(api.as_ref(), &id).await,
        Command::Check(document) => commands::check(&document.into_input()?.into_draft()?),
    };
    Ok(outcome)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // tracing 초기화 (RUST_LOG가 있으면 우선)
    let log_filter = format!(
        "settings={},settings_app={},settings_core={},settings_network={}",
        args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    // 설정 로드 후 CLI 인자로 오버라이드
    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
        config.validate()?;
    }
    info!("서버: {}", config.api_url);

    let api: Arc<dyn SettingsApi> = Arc::new(HttpSettingsClient::new(&config)?);
    let outcome = run(api, args.command).await?;

    for line in &outcome.lines {
        println!("{line}");
    }
    if let Some(notification) = &outcome.notification {
        if notification.is_error() {
            eprintln!("{notification}");
        } else {
            println!("{notification}");
        }
    }

    Ok(if outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
