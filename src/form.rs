//! 텍스트 탭의 폼 상태와 전이.
//!
//! 모든 전이는 [`TextForm::apply`]를 거치고 다음 상태를 새 값으로 돌려준다.
//! 번역이 실패하면 번역문과 감지 언어는 이전 값 그대로 남는다.

use crate::languages::{LanguageRegistry, MenuLanguage, AUTO_CODE};
use crate::translate::{self, SourceLanguage, TranslateError, TranslationBackend};

/// 전이에 필요한 외부 협력자 묶음.
pub struct FormContext<'a> {
    pub registry: &'a LanguageRegistry,
    pub backend: &'a dyn TranslationBackend,
    pub max_chunk_chars: usize,
}

impl<'a> FormContext<'a> {
    /// 현재 맥락으로 텍스트를 번역한다.
    pub fn translate(
        &self,
        text: &str,
        source: SourceLanguage,
        target: &MenuLanguage,
    ) -> Result<translate::Translation, TranslateError> {
        translate::translate(self.backend, text, source, target.code(), self.max_chunk_chars)
    }
}

/// 소스 언어 선택값.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    AutoDetect,
    Language(MenuLanguage),
}

impl SourceSelection {
    pub fn language(&self) -> SourceLanguage {
        match self {
            SourceSelection::AutoDetect => SourceLanguage::Auto,
            SourceSelection::Language(m) => SourceLanguage::Fixed(m.code()),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SourceSelection::AutoDetect => AUTO_CODE,
            SourceSelection::Language(m) => m.code(),
        }
    }
}

/// 사용자 동작.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SelectSource(SourceSelection),
    /// 메뉴 항목만 받으므로 대상 언어는 항상 구체적인 코드다.
    SelectTarget(MenuLanguage),
    /// 입력을 바꾸고, 비어 있지 않으면 곧바로 번역한다.
    EditInput(String),
    Translate,
    Clear,
    Swap,
}

/// 전이 결과. 실패해도 다음 상태는 항상 있다.
#[derive(Debug)]
#[must_use]
pub struct Transition {
    pub state: TextForm,
    pub error: Option<TranslateError>,
}

impl Transition {
    fn ok(state: TextForm) -> Self {
        Self { state, error: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextForm {
    source: SourceSelection,
    target: MenuLanguage,
    input_text: String,
    translated_text: String,
    detected: Option<String>,
}

impl TextForm {
    /// 기본 코드로 폼을 만든다. 소스는 "auto"나 메뉴 코드, 대상은 메뉴 코드.
    /// 메뉴에 없는 대상 코드는 첫 메뉴 항목으로, 소스 코드는 자동 감지로 대체한다.
    pub fn new(registry: &LanguageRegistry, source_code: &str, target_code: &str) -> Self {
        let source = if source_code.trim().eq_ignore_ascii_case(AUTO_CODE) {
            SourceSelection::AutoDetect
        } else {
            registry
                .menu_by_code(source_code)
                .cloned()
                .map(SourceSelection::Language)
                .unwrap_or(SourceSelection::AutoDetect)
        };
        let target = registry
            .menu_by_code(target_code)
            .unwrap_or_else(|| registry.first_menu())
            .clone();
        Self {
            source,
            target,
            input_text: String::new(),
            translated_text: String::new(),
            detected: None,
        }
    }

    pub fn source(&self) -> &SourceSelection {
        &self.source
    }

    pub fn target(&self) -> &MenuLanguage {
        &self.target
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    /// 감지된 소스 코드. 번역문이 비어 있으면 보이지 않는다.
    pub fn detected(&self) -> Option<&str> {
        if self.translated_text.is_empty() {
            None
        } else {
            self.detected.as_deref()
        }
    }

    /// 번역 없이 입력만 바꾼 상태. 실시간 번역을 끈 경우에 쓴다.
    pub fn with_input(&self, text: impl Into<String>) -> Self {
        Self {
            input_text: text.into(),
            ..self.clone()
        }
    }

    pub fn apply(&self, action: FormAction, ctx: &FormContext<'_>) -> Transition {
        match action {
            FormAction::SelectSource(source) => Transition::ok(Self {
                source,
                ..self.clone()
            }),
            FormAction::SelectTarget(target) => Transition::ok(Self {
                target,
                ..self.clone()
            }),
            FormAction::EditInput(text) => {
                let edited = Self {
                    input_text: text,
                    ..self.clone()
                };
                edited.translated(ctx)
            }
            FormAction::Translate => self.clone().translated(ctx),
            FormAction::Clear => Transition::ok(Self {
                input_text: String::new(),
                translated_text: String::new(),
                ..self.clone()
            }),
            FormAction::Swap => Transition::ok(self.swapped(ctx.registry)),
        }
    }

    /// 입력이 비어 있으면 백엔드를 부르지 않는다.
    fn translated(self, ctx: &FormContext<'_>) -> Transition {
        if self.input_text.is_empty() {
            return Transition::ok(self);
        }
        match ctx.translate(&self.input_text, self.source.language(), &self.target) {
            Ok(result) => Transition::ok(Self {
                translated_text: result.text,
                detected: Some(result.source_code),
                ..self
            }),
            Err(e) => Transition {
                state: self,
                error: Some(e),
            },
        }
    }

    /// 소스와 대상을 맞바꾼다. 입력이 있으면 입력과 번역문도 맞바꾼다.
    ///
    /// 자동 감지 상태에서는 감지된 언어가 메뉴에 있을 때만 그 언어를 소스로 보고 바꾼다.
    /// 그렇지 않으면 대상 언어가 "auto"가 될 수 없으므로 아무것도 바꾸지 않는다.
    fn swapped(&self, registry: &LanguageRegistry) -> Self {
        let concrete_source = match &self.source {
            SourceSelection::Language(m) => m.clone(),
            SourceSelection::AutoDetect => {
                match self.detected().and_then(|code| registry.menu_by_code(code)) {
                    Some(m) => m.clone(),
                    None => return self.clone(),
                }
            }
        };
        let mut next = Self {
            source: SourceSelection::Language(self.target.clone()),
            target: concrete_source,
            ..self.clone()
        };
        if !self.input_text.is_empty() {
            std::mem::swap(&mut next.input_text, &mut next.translated_text);
            // 새 번역문은 원래 입력이므로 이전 감지 결과는 더 이상 맞지 않는다
            next.detected = None;
        }
        next
    }
}
