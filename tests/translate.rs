use std::cell::RefCell;

use serde_json::json;
use translation_toolbox::translate::{
    parse_gtx_response, translate, BackendReply, SourceLanguage, TranslateError, TranslationBackend,
};

/// 받은 조각을 기록하고 그대로 돌려준다. 첫 조각에서만 언어를 감지한다.
#[derive(Default)]
struct EchoBackend {
    chunks: RefCell<Vec<String>>,
    no_detection: bool,
}

impl TranslationBackend for EchoBackend {
    fn translate(
        &self,
        text: &str,
        _source: SourceLanguage,
        _target: &str,
    ) -> Result<BackendReply, TranslateError> {
        let first = self.chunks.borrow().is_empty();
        self.chunks.borrow_mut().push(text.to_string());
        Ok(BackendReply {
            text: text.to_string(),
            detected: (first && !self.no_detection).then(|| "DE".to_string()),
        })
    }
}

#[test]
fn gtx_response_is_joined_per_sentence() {
    let body = json!([
        [["Hallo ", "Hello ", null, null, 10], ["Welt", "world", null, null, 10]],
        null,
        "en",
        null
    ]);
    let reply = parse_gtx_response(&body).expect("parse");
    assert_eq!(reply.text, "Hallo Welt");
    assert_eq!(reply.detected.as_deref(), Some("en"));
}

#[test]
fn gtx_detected_code_is_lowercased() {
    let body = json!([[["你好", "hello"]], null, "zh-CN"]);
    let reply = parse_gtx_response(&body).expect("parse");
    assert_eq!(reply.detected.as_deref(), Some("zh-cn"));
}

#[test]
fn unexpected_gtx_shape_is_unavailable() {
    let err = parse_gtx_response(&json!({"error": "quota"})).unwrap_err();
    assert!(matches!(err, TranslateError::TranslationUnavailable(_)));
}

#[test]
fn long_text_is_sent_in_line_chunks() {
    let backend = EchoBackend::default();
    let text = "first line\nsecond line\nthird";
    let result = translate(&backend, text, SourceLanguage::Auto, "en", 12).expect("translate");
    assert_eq!(result.text, text);
    assert_eq!(result.source_code, "de");
    assert_eq!(
        backend.chunks.borrow().as_slice(),
        &["first line\n", "second line\n", "third"]
    );
}

#[test]
fn fixed_source_is_not_reverified() {
    let backend = EchoBackend::default();
    let result = translate(&backend, "hello", SourceLanguage::Fixed("en"), "zh-cn", 4500)
        .expect("translate");
    assert_eq!(result.source_code, "en");
}

#[test]
fn auto_without_detection_is_an_error() {
    let backend = EchoBackend {
        no_detection: true,
        ..EchoBackend::default()
    };
    let err = translate(&backend, "hello", SourceLanguage::Auto, "zh-cn", 4500).unwrap_err();
    assert!(matches!(err, TranslateError::TranslationUnavailable(_)));
}

#[test]
fn empty_text_skips_the_backend() {
    let backend = EchoBackend::default();
    let result = translate(&backend, "", SourceLanguage::Auto, "zh-cn", 4500).expect("empty");
    assert!(result.text.is_empty());
    assert!(backend.chunks.borrow().is_empty());
}
