//! 문서/웹 탭 테스트. 추출과 번역 모두 가짜 협력자를 쓴다.
use std::cell::Cell;

use translation_toolbox::extract::{ExtractError, PageSource, DOCX_MIME, TEXT_MIME};
use translation_toolbox::form::FormContext;
use translation_toolbox::languages::LanguageRegistry;
use translation_toolbox::session::{DocumentPanel, PanelError, WebsitePanel};
use translation_toolbox::translate::{BackendReply, SourceLanguage, TranslateError, TranslationBackend};

struct UpperBackend {
    fail: bool,
    calls: Cell<usize>,
}

impl UpperBackend {
    fn new(fail: bool) -> Self {
        Self {
            fail,
            calls: Cell::new(0),
        }
    }
}

impl TranslationBackend for UpperBackend {
    fn translate(
        &self,
        text: &str,
        source: SourceLanguage,
        _target: &str,
    ) -> Result<BackendReply, TranslateError> {
        self.calls.set(self.calls.get() + 1);
        assert!(source.is_auto(), "document/website tabs always auto-detect");
        if self.fail {
            return Err(TranslateError::TranslationUnavailable("HTTP 503".into()));
        }
        Ok(BackendReply {
            text: text.to_uppercase(),
            detected: Some("fr".into()),
        })
    }
}

/// 미리 정한 본문을 돌려주는 페이지 소스. None이면 가져오기 실패.
struct StaticPage(Option<&'static str>);

impl PageSource for StaticPage {
    fn extract_from_url(&self, _url: &str) -> Result<String, ExtractError> {
        self.0
            .map(str::to_string)
            .ok_or_else(|| ExtractError::ExtractionFailed("timed out".into()))
    }
}

fn ctx<'a>(registry: &'a LanguageRegistry, backend: &'a UpperBackend) -> FormContext<'a> {
    FormContext {
        registry,
        backend,
        max_chunk_chars: 4500,
    }
}

#[test]
fn document_upload_then_translate() {
    let registry = LanguageRegistry::default();
    let backend = UpperBackend::new(false);
    let mut panel = DocumentPanel::new(&registry);

    panel
        .load("note.txt", "bonjour le monde".as_bytes(), TEXT_MIME)
        .expect("utf-8 text");
    assert_eq!(panel.file_name(), Some("note.txt"));
    assert_eq!(panel.content(), "bonjour le monde");
    assert_eq!(backend.calls.get(), 0);

    let en = registry.menu_by_code("en").cloned().expect("en in menu");
    panel.select_target(en);
    panel.translate(&ctx(&registry, &backend)).expect("translate");
    assert_eq!(panel.output().text(), "BONJOUR LE MONDE");
    assert_eq!(panel.output().detected(), Some("fr"));
    assert_eq!(panel.target().code(), "en");
}

#[test]
fn rejected_upload_keeps_previous_document() {
    let registry = LanguageRegistry::default();
    let backend = UpperBackend::new(false);
    let mut panel = DocumentPanel::new(&registry);
    panel.load("a.txt", b"hello", TEXT_MIME).expect("utf-8 text");
    panel.translate(&ctx(&registry, &backend)).expect("translate");
    let before = panel.clone();

    let err = panel.load("b.pdf", b"%PDF-1.4", "application/pdf").unwrap_err();
    assert!(matches!(err, ExtractError::UnsupportedFileType(_)));
    let err = panel.load("c.txt", &[0xff, 0xfe, 0x00], TEXT_MIME).unwrap_err();
    assert!(matches!(err, ExtractError::DecodeError(_)));
    let err = panel.load("d.docx", b"not a zip", DOCX_MIME).unwrap_err();
    assert!(matches!(err, ExtractError::UnsupportedDocument(_)));
    assert_eq!(panel, before);
}

#[test]
fn new_upload_clears_old_translation() {
    let registry = LanguageRegistry::default();
    let backend = UpperBackend::new(false);
    let mut panel = DocumentPanel::new(&registry);
    panel.load("a.txt", b"hello", TEXT_MIME).expect("utf-8 text");
    panel.translate(&ctx(&registry, &backend)).expect("translate");

    panel.load("b.txt", b"world", TEXT_MIME).expect("utf-8 text");
    assert_eq!(panel.content(), "world");
    assert!(panel.output().text().is_empty());
    assert_eq!(panel.output().detected(), None);
}

#[test]
fn empty_document_is_not_sent() {
    let registry = LanguageRegistry::default();
    let backend = UpperBackend::new(false);
    let mut panel = DocumentPanel::new(&registry);
    panel.load("empty.txt", b"", TEXT_MIME).expect("empty is valid utf-8");
    panel.translate(&ctx(&registry, &backend)).expect("no-op");
    assert_eq!(backend.calls.get(), 0);
}

#[test]
fn document_translation_failure_keeps_output() {
    let registry = LanguageRegistry::default();
    let ok = UpperBackend::new(false);
    let down = UpperBackend::new(true);
    let mut panel = DocumentPanel::new(&registry);
    panel.load("a.txt", b"hello", TEXT_MIME).expect("utf-8 text");
    panel.translate(&ctx(&registry, &ok)).expect("translate");

    let err = panel.translate(&ctx(&registry, &down)).unwrap_err();
    assert!(matches!(err, TranslateError::TranslationUnavailable(_)));
    assert_eq!(panel.output().text(), "HELLO");
}

#[test]
fn website_extract_and_translate() {
    let registry = LanguageRegistry::default();
    let backend = UpperBackend::new(false);
    let mut panel = WebsitePanel::new(&registry);
    panel.url = "https://example.com".into();

    panel
        .extract_and_translate(&StaticPage(Some("salut")), &ctx(&registry, &backend))
        .expect("extract and translate");
    assert_eq!(panel.extracted(), "salut");
    assert_eq!(panel.output().text(), "SALUT");
    assert_eq!(panel.output().detected(), Some("fr"));
}

#[test]
fn website_failures_leave_panel_untouched() {
    let registry = LanguageRegistry::default();
    let ok = UpperBackend::new(false);
    let down = UpperBackend::new(true);
    let mut panel = WebsitePanel::new(&registry);
    panel.url = "https://example.com".into();
    panel
        .extract_and_translate(&StaticPage(Some("salut")), &ctx(&registry, &ok))
        .expect("first run");
    let before = panel.clone();

    let fetch_failed = StaticPage(None);
    let err = panel
        .extract_and_translate(&fetch_failed, &ctx(&registry, &ok))
        .unwrap_err();
    assert!(matches!(err, PanelError::Extract(ExtractError::ExtractionFailed(_))));
    assert_eq!(panel, before);

    // 추출은 됐지만 번역이 실패하면 추출 결과도 반영하지 않는다
    let err = panel
        .extract_and_translate(&StaticPage(Some("autre page")), &ctx(&registry, &down))
        .unwrap_err();
    assert!(matches!(err, PanelError::Translate(_)));
    assert_eq!(panel, before);
}

#[test]
fn page_without_text_is_not_translated() {
    let registry = LanguageRegistry::default();
    let backend = UpperBackend::new(false);
    let mut panel = WebsitePanel::new(&registry);
    panel.url = "https://example.com".into();
    panel
        .extract_and_translate(&StaticPage(Some("")), &ctx(&registry, &backend))
        .expect("empty page");
    assert_eq!(backend.calls.get(), 0);
    assert!(panel.output().text().is_empty());
}
