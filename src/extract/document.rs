use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use super::ExtractError;

pub const TEXT_MIME: &str = "text/plain";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// 업로드를 허용하는 문서 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    WordDocument,
}

impl DocumentKind {
    /// MIME 형식을 판별한다. 허용 목록 밖이면 디코딩 전에 거부한다.
    pub fn from_mime(mime: &str) -> Result<Self, ExtractError> {
        // "text/plain; charset=utf-8" 같은 매개변수는 무시
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            TEXT_MIME => Ok(DocumentKind::PlainText),
            DOCX_MIME => Ok(DocumentKind::WordDocument),
            _ => Err(ExtractError::UnsupportedFileType(mime.to_string())),
        }
    }
}

/// 파일 확장자로 MIME 형식을 추정한다. 파일 대화상자/CLI 경로 입력용.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "txt" | "text" => TEXT_MIME,
        "docx" => DOCX_MIME,
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "html" | "htm" => "text/html",
        _ => "application/octet-stream",
    }
}

/// 업로드된 바이트에서 본문 텍스트를 얻는다.
pub fn extract_from_file(bytes: &[u8], mime: &str) -> Result<String, ExtractError> {
    let kind = DocumentKind::from_mime(mime)?;
    debug!(?kind, size = bytes.len(), "문서 추출");
    match kind {
        DocumentKind::PlainText => Ok(std::str::from_utf8(bytes)?.to_string()),
        DocumentKind::WordDocument => docx_text(bytes),
    }
}

/// 머리글, 본문, 바닥글 순서로 텍스트를 모은다.
fn docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::UnsupportedDocument(e.to_string()))?;

    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    let parts_matching = |prefix: &str| -> Vec<String> {
        names
            .iter()
            .filter(|n| n.starts_with(prefix) && n.ends_with(".xml"))
            .cloned()
            .collect()
    };
    let headers = parts_matching("word/header");
    let footers = parts_matching("word/footer");

    let body = read_part(&mut archive, "word/document.xml")?;
    let mut out = String::new();
    for name in &headers {
        out.push_str(&part_text(&read_part(&mut archive, name)?)?);
    }
    out.push_str(&part_text(&body)?);
    for name in &footers {
        out.push_str(&part_text(&read_part(&mut archive, name)?)?);
    }
    Ok(out.trim().to_string())
}

fn read_part(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> Result<Vec<u8>, ExtractError> {
    let mut file = archive
        .by_name(name)
        .map_err(|e| ExtractError::UnsupportedDocument(format!("{name}: {e}")))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .map_err(|e| ExtractError::UnsupportedDocument(format!("{name}: {e}")))?;
    Ok(buf)
}

/// WordprocessingML 조각에서 w:t 텍스트를 뽑는다. 문단 끝은 줄바꿈, w:tab은 탭.
fn part_text(xml: &[u8]) -> Result<String, ExtractError> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(false);
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:t" {
                    in_text = true;
                }
            }
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" => out.push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractError::UnsupportedDocument(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::UnsupportedDocument(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
    Ok(out)
}
