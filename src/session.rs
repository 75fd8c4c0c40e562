//! 한 사용자 세션의 상태. 탭마다 독립된 상태를 가지며 서로 읽거나 쓰지 않는다.

use crate::config::Config;
use crate::extract::{self, ExtractError, PageSource};
use crate::form::{FormContext, TextForm};
use crate::languages::{LanguageRegistry, MenuLanguage};
use crate::translate::{SourceLanguage, TranslateError};

/// 문서/웹 탭의 실패. 어느 단계에서 실패했는지 구분한다.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Translate(#[from] TranslateError),
}

/// 문서/웹 탭이 공유하는 번역 결과 칸.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedOutput {
    text: String,
    detected: Option<String>,
}

impl TranslatedOutput {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 번역문이 비어 있으면 감지 언어도 없다.
    pub fn detected(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            self.detected.as_deref()
        }
    }
}

/// 문서 탭. 업로드한 파일 내용을 자동 감지로 번역한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPanel {
    target: MenuLanguage,
    file_name: Option<String>,
    content: String,
    output: TranslatedOutput,
}

impl DocumentPanel {
    pub fn new(registry: &LanguageRegistry) -> Self {
        Self {
            target: registry.first_menu().clone(),
            file_name: None,
            content: String::new(),
            output: TranslatedOutput::default(),
        }
    }

    pub fn target(&self) -> &MenuLanguage {
        &self.target
    }

    pub fn select_target(&mut self, target: MenuLanguage) {
        self.target = target;
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn output(&self) -> &TranslatedOutput {
        &self.output
    }

    /// 파일을 읽는다. 실패하면 이전 내용이 그대로 남는다.
    pub fn load(&mut self, file_name: &str, bytes: &[u8], mime: &str) -> Result<(), ExtractError> {
        let content = extract::extract_from_file(bytes, mime)?;
        self.file_name = Some(file_name.to_string());
        self.content = content;
        self.output = TranslatedOutput::default();
        Ok(())
    }

    /// 내용이 비어 있으면 백엔드를 부르지 않는다.
    pub fn translate(&mut self, ctx: &FormContext<'_>) -> Result<(), TranslateError> {
        if self.content.is_empty() {
            return Ok(());
        }
        let result = ctx.translate(&self.content, SourceLanguage::Auto, &self.target)?;
        self.output = TranslatedOutput {
            text: result.text,
            detected: Some(result.source_code),
        };
        Ok(())
    }
}

/// 웹 탭. URL 본문을 추출해 자동 감지로 번역한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsitePanel {
    /// 입력 칸과 직접 묶이는 URL 문자열
    pub url: String,
    target: MenuLanguage,
    extracted: String,
    output: TranslatedOutput,
}

impl WebsitePanel {
    pub fn new(registry: &LanguageRegistry) -> Self {
        Self {
            url: String::new(),
            target: registry.first_menu().clone(),
            extracted: String::new(),
            output: TranslatedOutput::default(),
        }
    }

    pub fn target(&self) -> &MenuLanguage {
        &self.target
    }

    pub fn select_target(&mut self, target: MenuLanguage) {
        self.target = target;
    }

    pub fn extracted(&self) -> &str {
        &self.extracted
    }

    pub fn output(&self) -> &TranslatedOutput {
        &self.output
    }

    /// 추출과 번역을 한 동작으로 처리한다. 어느 단계든 실패하면 화면 상태는 바뀌지 않는다.
    pub fn extract_and_translate(
        &mut self,
        pages: &dyn PageSource,
        ctx: &FormContext<'_>,
    ) -> Result<(), PanelError> {
        let extracted = pages.extract_from_url(&self.url)?;
        let output = if extracted.is_empty() {
            TranslatedOutput::default()
        } else {
            let result = ctx.translate(&extracted, SourceLanguage::Auto, &self.target)?;
            TranslatedOutput {
                text: result.text,
                detected: Some(result.source_code),
            }
        };
        self.extracted = extracted;
        self.output = output;
        Ok(())
    }
}

/// 세션 하나의 전체 상태.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub text: TextForm,
    pub document: DocumentPanel,
    pub website: WebsitePanel,
}

impl Session {
    pub fn new(registry: &LanguageRegistry, default_source: &str, default_target: &str) -> Self {
        Self {
            text: TextForm::new(registry, default_source, default_target),
            document: DocumentPanel::new(registry),
            website: WebsitePanel::new(registry),
        }
    }

    /// 설정의 기본 언어로 세션을 만든다.
    pub fn from_config(registry: &LanguageRegistry, cfg: &Config) -> Self {
        Self::new(registry, &cfg.default_source, &cfg.default_target)
    }
}
