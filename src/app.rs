use std::path::Path;

use crate::config::{Config, ConfigError};
use crate::extract::{ExtractError, WebsiteExtractor};
use crate::form::FormContext;
use crate::i18n::{self, Localizer};
use crate::languages::LanguageRegistry;
use crate::session::{PanelError, Session};
use crate::translate::{GoogleTranslateBackend, TranslateError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 번역 오류
    #[error("번역 오류: {0}")]
    Translate(#[from] TranslateError),
    /// 문서/웹 추출 오류
    #[error("추출 오류: {0}")]
    Extract(#[from] ExtractError),
    /// 알 수 없는 언어 코드
    #[error("알 수 없는 언어 코드: {0}")]
    UnknownLanguage(String),
}

impl From<PanelError> for AppError {
    fn from(value: PanelError) -> Self {
        match value {
            PanelError::Extract(e) => AppError::Extract(e),
            PanelError::Translate(e) => AppError::Translate(e),
        }
    }
}

impl AppError {
    /// 표준 입력이 닫혔는지.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }

    /// 사용자에게 보여줄 현지화된 메시지.
    pub fn describe(&self, tr: &Localizer) -> String {
        match self {
            AppError::Translate(e) => tr.describe_translate_error(e),
            AppError::Extract(e) => tr.describe_extract_error(e),
            other => format!("{}: {other}", tr.t(i18n::keys::ERROR_PREFIX)),
        }
    }
}

/// 설정에서 만든 외부 협력자 묶음. 세션 상태는 담지 않는다.
pub struct Services {
    pub registry: LanguageRegistry,
    pub backend: GoogleTranslateBackend,
    pub pages: WebsiteExtractor,
    pub max_chunk_chars: usize,
}

impl Services {
    pub fn from_config(cfg: &Config) -> Result<Self, AppError> {
        let registry = cfg.registry()?;
        let backend = GoogleTranslateBackend::new(&cfg.translate_endpoint, cfg.request_timeout())?;
        let pages = WebsiteExtractor::new(cfg.request_timeout(), cfg.accept_invalid_certs)?;
        Ok(Self {
            registry,
            backend,
            pages,
            max_chunk_chars: cfg.max_chunk_chars,
        })
    }

    pub fn context(&self) -> FormContext<'_> {
        FormContext {
            registry: &self.registry,
            backend: &self.backend,
            max_chunk_chars: self.max_chunk_chars,
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정 변경은 `config_path`에 저장한다.
/// 표준 입력이 끝나면 종료로 본다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    tr: &mut Localizer,
    services: &Services,
) -> Result<(), AppError> {
    let mut session = Session::from_config(&services.registry, config);
    loop {
        let step = match ui_cli::main_menu(tr)? {
            MenuChoice::Text => ui_cli::handle_text(tr, services, config, &mut session.text),
            MenuChoice::Document => ui_cli::handle_document(tr, services, &mut session.document),
            MenuChoice::Website => ui_cli::handle_website(tr, services, &mut session.website),
            MenuChoice::Settings => match ui_cli::handle_settings(tr, config) {
                Ok(true) => save_settings(config, config_path).map(|new_tr| {
                    *tr = new_tr;
                    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                }),
                Ok(false) => Ok(()),
                Err(e) => Err(e),
            },
            MenuChoice::Exit => break,
        };
        match step {
            Ok(()) => {}
            Err(e) if e.is_end_of_input() => break,
            Err(e) => return Err(e),
        }
    }
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}

/// 설정을 저장하고 바뀐 UI 언어로 로컬라이저를 다시 만든다.
fn save_settings(config: &Config, path: &Path) -> Result<Localizer, AppError> {
    config.save_to(path)?;
    let lang = i18n::resolve_language(&config.ui_language, None);
    Ok(Localizer::new_with_pack(&lang, config.language_pack_dir.as_deref()))
}
