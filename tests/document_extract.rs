//! 업로드 문서 추출 테스트. .docx는 메모리에서 zip으로 만든다.
use std::io::{Cursor, Write};

use translation_toolbox::extract::{extract_from_file, ExtractError, DOCX_MIME, TEXT_MIME};
use zip::write::FileOptions;

fn paragraph_xml(root: &str, lines: &[&str]) -> String {
    let body: String = lines
        .iter()
        .map(|l| format!("<w:p><w:r><w:t>{l}</w:t></w:r></w:p>"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:{root} xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">{body}</w:{root}>"#
    )
}

fn build_docx(parts: &[(&str, String)]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        zip.start_file(*name, FileOptions::default()).expect("start file");
        zip.write_all(content.as_bytes()).expect("write part");
    }
    zip.finish().expect("finish zip").into_inner()
}

#[test]
fn plain_text_is_decoded_as_utf8() {
    let text = extract_from_file("你好，世界\nsecond".as_bytes(), TEXT_MIME).expect("utf-8");
    assert_eq!(text, "你好，世界\nsecond");
}

#[test]
fn invalid_utf8_is_decode_error() {
    let err = extract_from_file(&[b'o', b'k', 0xc3, 0x28], TEXT_MIME).unwrap_err();
    assert!(matches!(err, ExtractError::DecodeError(_)));
}

#[test]
fn other_mime_types_are_rejected_before_decoding() {
    // 잘못된 바이트라도 형식 검사가 먼저다
    for mime in ["application/pdf", "text/html", "application/msword", ""] {
        let err = extract_from_file(&[0xff, 0xfe], mime).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFileType(_)), "mime={mime}");
    }
}

#[test]
fn docx_body_paragraphs_become_lines() {
    let bytes = build_docx(&[(
        "word/document.xml",
        paragraph_xml("document", &["First paragraph", "Second &amp; last"]),
    )]);
    let text = extract_from_file(&bytes, DOCX_MIME).expect("docx");
    assert_eq!(text, "First paragraph\nSecond & last");
}

#[test]
fn docx_headers_and_footers_wrap_the_body() {
    let bytes = build_docx(&[
        ("[Content_Types].xml", "<Types/>".to_string()),
        ("word/document.xml", paragraph_xml("document", &["Body"])),
        ("word/header1.xml", paragraph_xml("hdr", &["Header"])),
        ("word/footer1.xml", paragraph_xml("ftr", &["Footer"])),
    ]);
    let text = extract_from_file(&bytes, DOCX_MIME).expect("docx");
    assert_eq!(text, "Header\nBody\nFooter");
}

#[test]
fn broken_docx_is_unsupported_document() {
    let err = extract_from_file(b"PK\x03\x04 truncated", DOCX_MIME).unwrap_err();
    assert!(matches!(err, ExtractError::UnsupportedDocument(_)));

    // zip이지만 본문 파트가 없음
    let bytes = build_docx(&[("word/styles.xml", "<w:styles/>".to_string())]);
    let err = extract_from_file(&bytes, DOCX_MIME).unwrap_err();
    assert!(matches!(err, ExtractError::UnsupportedDocument(_)));

    // 본문 XML이 깨짐
    let bytes = build_docx(&[("word/document.xml", "<w:document><w:p></w:document>".to_string())]);
    let err = extract_from_file(&bytes, DOCX_MIME).unwrap_err();
    assert!(matches!(err, ExtractError::UnsupportedDocument(_)));
}
