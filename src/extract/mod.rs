//! 업로드 문서와 웹 페이지에서 텍스트를 뽑아낸다.

pub mod document;
pub mod website;

pub use document::{extract_from_file, mime_for_path, DocumentKind, DOCX_MIME, TEXT_MIME};
pub use website::{html_to_text, validate_url, PageSource, WebsiteExtractor};

/// 텍스트 추출 실패.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// UTF-8이 아닌 텍스트 파일
    #[error("텍스트 인코딩 오류: {0}")]
    DecodeError(#[from] std::str::Utf8Error),
    /// 구조가 깨진 워드 문서
    #[error("문서를 읽을 수 없습니다: {0}")]
    UnsupportedDocument(String),
    /// 허용하지 않는 MIME 형식
    #[error("지원하지 않는 파일 형식: {0}")]
    UnsupportedFileType(String),
    /// 네트워크/HTTP 실패
    #[error("웹 페이지를 가져오지 못했습니다: {0}")]
    ExtractionFailed(String),
    /// 비어 있거나 형식이 잘못된 URL
    #[error("잘못된 URL: {0}")]
    InvalidUrl(String),
}
