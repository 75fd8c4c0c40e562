use std::time::Duration;

use kuchiki::iter::NodeEdge;
use kuchiki::traits::TendrilSink;
use reqwest::blocking::Client;
use tracing::{debug, warn};
use url::Url;

use super::ExtractError;

/// 본문 텍스트에서 제외하는 요소.
fn is_hidden_element(name: &str) -> bool {
    matches!(
        name,
        "script" | "style" | "noscript" | "template" | "iframe" | "svg" | "head"
    )
}

/// 끝날 때 줄을 바꾸는 블록 요소.
fn is_block_element(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "nav"
            | "aside"
            | "main"
            | "li"
            | "ul"
            | "ol"
            | "dl"
            | "dt"
            | "dd"
            | "tr"
            | "table"
            | "blockquote"
            | "pre"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "figcaption"
            | "form"
    )
}

/// URL에서 본문 텍스트를 얻는 경계. 테스트에서는 가짜 구현을 쓴다.
pub trait PageSource {
    fn extract_from_url(&self, url: &str) -> Result<String, ExtractError>;
}

/// URL을 가져와 보이는 텍스트를 돌려준다.
///
/// 인증서 검증은 기본적으로 꺼져 있다(`accept_invalid_certs`). 중간자 공격을 탐지하지
/// 못하므로 사용자에게 알린다.
pub struct WebsiteExtractor {
    http: Client,
}

impl WebsiteExtractor {
    pub fn new(timeout: Duration, accept_invalid_certs: bool) -> Result<Self, ExtractError> {
        if accept_invalid_certs {
            warn!("웹 페이지 가져오기에서 TLS 인증서 검증이 꺼져 있습니다");
        }
        let http = Client::builder()
            .user_agent("Mozilla/5.0")
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| ExtractError::ExtractionFailed(e.to_string()))?;
        Ok(Self { http })
    }
}

impl PageSource for WebsiteExtractor {
    /// GET 한 번으로 페이지를 가져온다. 재시도하지 않는다.
    fn extract_from_url(&self, raw_url: &str) -> Result<String, ExtractError> {
        let url = validate_url(raw_url)?;
        debug!(%url, "웹 페이지 요청");
        let response = self.http.get(url).send().map_err(|e| {
            warn!(error = %e, "웹 페이지 요청 실패");
            ExtractError::ExtractionFailed(e.to_string())
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::ExtractionFailed(format!("HTTP {status}")));
        }
        let body = response
            .text()
            .map_err(|e| ExtractError::ExtractionFailed(e.to_string()))?;
        Ok(html_to_text(&body))
    }
}

/// 비어 있거나 http(s)가 아닌 URL은 요청 전에 거부한다.
pub fn validate_url(raw: &str) -> Result<Url, ExtractError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::InvalidUrl("(empty)".into()));
    }
    let url = Url::parse(trimmed).map_err(|e| ExtractError::InvalidUrl(format!("{trimmed}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ExtractError::InvalidUrl(trimmed.to_string()));
    }
    Ok(url)
}

/// HTML에서 태그, 스크립트, 스타일을 걷어내고 보이는 텍스트만 남긴다.
/// 줄마다 공백을 한 칸으로 줄이고 빈 줄은 버린다.
pub fn html_to_text(html: &str) -> String {
    let document = kuchiki::parse_html().one(html);
    let mut raw = String::new();
    let mut hidden_depth = 0usize;

    for edge in document.traverse() {
        match edge {
            NodeEdge::Start(node) => {
                if let Some(element) = node.as_element() {
                    let name = element.name.local.as_ref();
                    if is_hidden_element(name) {
                        hidden_depth += 1;
                    } else if name == "br" && hidden_depth == 0 {
                        raw.push('\n');
                    }
                } else if let Some(text) = node.as_text() {
                    if hidden_depth == 0 {
                        raw.push_str(&text.borrow());
                    }
                }
            }
            NodeEdge::End(node) => {
                if let Some(element) = node.as_element() {
                    let name = element.name.local.as_ref();
                    if is_hidden_element(name) {
                        hidden_depth = hidden_depth.saturating_sub(1);
                    } else if is_block_element(name) && hidden_depth == 0 {
                        raw.push('\n');
                    }
                }
            }
        }
    }

    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
