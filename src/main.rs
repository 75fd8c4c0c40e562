use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use translation_toolbox::app::{self, AppError, Services};
use translation_toolbox::config::{self, Config};
use translation_toolbox::extract::{self, PageSource};
use translation_toolbox::i18n::{self, keys, Localizer};
use translation_toolbox::languages::{self, AUTO_CODE};
use translation_toolbox::logging;
use translation_toolbox::translate::{self, SourceLanguage, Translation};

#[derive(Debug, Parser)]
#[command(name = "translation_toolbox_cli", version, about = "문자/문서/웹 번역 도구")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// UI 언어(auto/zh-cn/en-us)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 텍스트를 번역한다. 텍스트가 없으면 표준 입력을 읽는다.
    Text {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        text: Option<String>,
    },
    /// .txt/.docx 파일을 번역한다.
    File {
        path: PathBuf,
        #[arg(long)]
        to: Option<String>,
    },
    /// 웹 페이지 본문을 추출해 번역한다.
    Url {
        url: String,
        #[arg(long)]
        to: Option<String>,
    },
    /// 지원 언어 목록
    Languages,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    let mut cfg = match config::load_or_create(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("오류: {err}");
            Config::default()
        }
    };
    logging::init(&cfg.log_level);
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.ui_language.as_str()));
    let mut tr = Localizer::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    if let Err(err) = try_run(cli.command, &cli.config, &mut cfg, &mut tr) {
        eprintln!("{}", err.describe(&tr));
        std::process::exit(1);
    }
}

fn try_run(
    command: Option<Command>,
    config_path: &Path,
    cfg: &mut Config,
    tr: &mut Localizer,
) -> Result<(), AppError> {
    let services = Services::from_config(cfg)?;
    match command {
        None => app::run(cfg, config_path, tr, &services),
        Some(Command::Text { from, to, text }) => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf.trim_end().to_string()
                }
            };
            let from = from.unwrap_or_else(|| cfg.default_source.clone());
            let source = if from.eq_ignore_ascii_case(AUTO_CODE) {
                SourceLanguage::Auto
            } else {
                SourceLanguage::Fixed(known_code(&from)?)
            };
            let target = known_code(to.as_deref().unwrap_or(&cfg.default_target))?;
            let result = translate::translate(&services.backend, &text, source, target, services.max_chunk_chars)?;
            print_translation(tr, &services, &result);
            Ok(())
        }
        Some(Command::File { path, to }) => {
            let bytes = std::fs::read(&path)?;
            let content = extract::extract_from_file(&bytes, extract::mime_for_path(&path))?;
            translate_extracted(tr, &services, cfg, &content, to)
        }
        Some(Command::Url { url, to }) => {
            eprintln!("{}", tr.t(keys::TLS_NOTICE));
            let content = services.pages.extract_from_url(&url)?;
            translate_extracted(tr, &services, cfg, &content, to)
        }
        Some(Command::Languages) => {
            for entry in services.registry.all() {
                println!("{:<8} {}", entry.code, entry.name);
            }
            Ok(())
        }
    }
}

fn translate_extracted(
    tr: &Localizer,
    services: &Services,
    cfg: &Config,
    content: &str,
    to: Option<String>,
) -> Result<(), AppError> {
    let target = known_code(to.as_deref().unwrap_or(&cfg.default_target))?;
    let result = translate::translate(
        &services.backend,
        content,
        SourceLanguage::Auto,
        target,
        services.max_chunk_chars,
    )?;
    print_translation(tr, services, &result);
    Ok(())
}

fn known_code(code: &str) -> Result<&'static str, AppError> {
    languages::resolve(code).ok_or_else(|| AppError::UnknownLanguage(code.to_string()))
}

fn print_translation(tr: &Localizer, services: &Services, result: &Translation) {
    println!("{}", result.text);
    if !result.text.is_empty() {
        eprintln!(
            "{} {}",
            tr.t(keys::RESULT_DETECTED),
            services.registry.name_for(&result.source_code)
        );
    }
}
