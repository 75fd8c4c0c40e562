//! 번역 호출부. 실제 번역은 외부 서비스에 위임한다.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::languages::AUTO_CODE;

/// 공개 Google 번역(gtx) 엔드포인트.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// gtx 엔드포인트가 한 번에 받는 문자 수보다 약간 작게 잡은 기본 분할 크기.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 4500;

/// 소스 언어 선택. 자동 감지 또는 명시 코드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    Auto,
    Fixed(&'static str),
}

impl SourceLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            SourceLanguage::Auto => AUTO_CODE,
            SourceLanguage::Fixed(code) => code,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SourceLanguage::Auto)
    }
}

/// 번역 실패.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// 백엔드에 연결할 수 없거나 오류/비정상 응답을 돌려줌
    #[error("번역 서비스를 사용할 수 없습니다: {0}")]
    TranslationUnavailable(String),
}

/// 백엔드가 돌려준 원시 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub text: String,
    pub detected: Option<String>,
}

/// 외부 번역 기능의 경계. 테스트에서는 가짜 구현으로 대체한다.
pub trait TranslationBackend {
    fn translate(
        &self,
        text: &str,
        source: SourceLanguage,
        target: &str,
    ) -> Result<BackendReply, TranslateError>;
}

/// 번역 결과와 확정된 소스 언어 코드.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub source_code: String,
}

/// 텍스트를 번역한다.
///
/// - 자동 감지면 백엔드가 감지한 코드를, 명시 소스면 주어진 코드를 그대로 돌려준다.
///   명시 소스를 백엔드가 실제로 따랐는지는 재검증하지 않는다.
/// - 빈 텍스트는 백엔드를 호출하지 않고 빈 결과를 돌려준다.
/// - 긴 텍스트는 줄 단위로 나눠 순서대로 번역한 뒤 이어 붙인다.
pub fn translate(
    backend: &dyn TranslationBackend,
    text: &str,
    source: SourceLanguage,
    target: &str,
    max_chunk_chars: usize,
) -> Result<Translation, TranslateError> {
    if text.is_empty() {
        return Ok(Translation {
            text: String::new(),
            source_code: source.code().to_string(),
        });
    }

    let mut out = String::with_capacity(text.len());
    let mut detected: Option<String> = None;
    for chunk in split_chunks(text, max_chunk_chars) {
        let reply = backend.translate(chunk, source, target)?;
        if detected.is_none() {
            detected = reply.detected;
        }
        out.push_str(&reply.text);
    }

    let source_code = match source {
        SourceLanguage::Fixed(code) => code.to_string(),
        SourceLanguage::Auto => detected
            .map(|c| c.trim().to_ascii_lowercase())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                TranslateError::TranslationUnavailable("response has no detected language".into())
            })?,
    };
    Ok(Translation {
        text: out,
        source_code,
    })
}

/// 텍스트를 최대 `max_chars` 문자 이하 조각으로 나눈다.
/// 가능한 한 줄 경계에서 자르고, 한 줄이 너무 길면 문자 경계에서 자른다.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        if rest.chars().count() <= max_chars {
            chunks.push(rest);
            break;
        }
        // max_chars 번째 문자의 바이트 위치
        let hard_end = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let cut = match rest[..hard_end].rfind('\n') {
            Some(nl) if nl > 0 => nl + 1,
            _ => hard_end,
        };
        chunks.push(&rest[..cut]);
        rest = &rest[cut..];
    }
    chunks
}

/// 공개 gtx 엔드포인트를 쓰는 백엔드.
pub struct GoogleTranslateBackend {
    http: Client,
    endpoint: String,
}

impl GoogleTranslateBackend {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TranslateError> {
        let http = Client::builder()
            .user_agent("Mozilla/5.0")
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::TranslationUnavailable(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }
}

impl TranslationBackend for GoogleTranslateBackend {
    fn translate(
        &self,
        text: &str,
        source: SourceLanguage,
        target: &str,
    ) -> Result<BackendReply, TranslateError> {
        debug!(
            chars = text.chars().count(),
            from = source.code(),
            to = target,
            "번역 요청"
        );
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source.code()),
                ("tl", target),
                ("dt", "t"),
            ])
            .form(&[("q", text)])
            .send()
            .map_err(|e| {
                warn!(error = %e, "번역 요청 실패");
                TranslateError::TranslationUnavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "번역 API 오류 응답");
            return Err(TranslateError::TranslationUnavailable(format!(
                "HTTP {status}"
            )));
        }
        let json: serde_json::Value = response
            .json()
            .map_err(|e| TranslateError::TranslationUnavailable(format!("invalid JSON: {e}")))?;
        parse_gtx_response(&json)
    }
}

/// gtx 응답을 해석한다. 형식: `[[["번역", "원문", ...], ...], null, "감지코드", ...]`
pub fn parse_gtx_response(json: &serde_json::Value) -> Result<BackendReply, TranslateError> {
    let sentences = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslateError::TranslationUnavailable("unexpected response shape".into()))?;
    let text: String = sentences
        .iter()
        .filter_map(|s| s.get(0).and_then(|v| v.as_str()))
        .collect();
    let detected = json
        .get(2)
        .and_then(|v| v.as_str())
        .map(|s| s.to_ascii_lowercase());
    Ok(BackendReply { text, detected })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_prefers_line_boundaries() {
        let text = "aaaa\nbbbb\ncccc";
        let chunks = split_chunks(text, 10);
        assert_eq!(chunks, vec!["aaaa\nbbbb\n", "cccc"]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn split_hard_cuts_long_lines_on_char_boundaries() {
        let text = "你好世界你好世界";
        let chunks = split_chunks(text, 3);
        assert_eq!(chunks, vec!["你好世", "界你好", "世界"]);
    }

    #[test]
    fn short_text_is_single_chunk() {
        assert_eq!(split_chunks("hello", 4500), vec!["hello"]);
    }
}
