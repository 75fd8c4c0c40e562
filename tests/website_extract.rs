//! 웹 본문 추출 테스트. 네트워크 대신 로컬 TCP 서버를 띄운다.
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use translation_toolbox::extract::{html_to_text, ExtractError, PageSource, WebsiteExtractor};

/// 요청 하나를 받아 고정 응답을 돌려주는 서버. 주소를 돌려준다.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let mut seen = Vec::new();
            while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => seen.extend_from_slice(&buf[..n]),
                }
            }
            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(reply.as_bytes());
        }
    });
    format!("http://{addr}/")
}

fn extractor() -> WebsiteExtractor {
    WebsiteExtractor::new(Duration::from_secs(5), true).expect("client")
}

#[test]
fn scripts_styles_and_head_are_dropped() {
    let html = r#"<html><head><title>Tab title</title><style>p { color: red }</style></head>
        <body><h1>Title</h1><script>var x = 1;</script>
        <p>First <b>para</b></p><ul><li>one</li><li>two</li></ul>line<br>break
        <noscript>enable js</noscript></body></html>"#;
    assert_eq!(html_to_text(html), "Title\nFirst para\none\ntwo\nline\nbreak");
}

#[test]
fn empty_or_malformed_url_is_invalid() {
    let pages = extractor();
    for url in ["", "   ", "example.com", "ftp://example.com", "http://"] {
        let err = pages.extract_from_url(url).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUrl(_)), "url={url:?}");
    }
}

#[test]
fn fetches_visible_text_from_server() {
    let url = serve_once("200 OK", "<html><body><p>Bonjour <em>le</em> monde</p><script>x()</script></body></html>");
    let text = extractor().extract_from_url(&url).expect("fetch");
    assert_eq!(text, "Bonjour le monde");
}

#[test]
fn error_status_is_extraction_failed() {
    let url = serve_once("404 Not Found", "<h1>missing</h1>");
    let err = extractor().extract_from_url(&url).unwrap_err();
    assert!(matches!(err, ExtractError::ExtractionFailed(_)));
}

#[test]
fn refused_connection_is_extraction_failed() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let err = extractor()
        .extract_from_url(&format!("http://127.0.0.1:{port}/"))
        .unwrap_err();
    assert!(matches!(err, ExtractError::ExtractionFailed(_)));
}
