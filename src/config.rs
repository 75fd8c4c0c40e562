use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::languages::{self, LanguageRegistry, MenuLanguageConfig, RegistryError};
use crate::translate;

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 빠진 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어(auto/zh-cn/en-us)
    pub ui_language: String,
    /// 언어팩 디렉터리(선택)
    pub language_pack_dir: Option<String>,
    /// 메뉴에 노출할 언어
    pub menu_languages: Vec<MenuLanguageConfig>,
    /// 텍스트 탭 기본 소스 언어(auto 가능)
    pub default_source: String,
    /// 텍스트 탭 기본 대상 언어
    pub default_target: String,
    pub translate_endpoint: String,
    pub request_timeout_secs: u64,
    /// 한 번에 보내는 최대 문자 수
    pub max_chunk_chars: usize,
    /// 웹 페이지 가져오기에서 TLS 인증서 검증을 끈다(기본 true).
    pub accept_invalid_certs: bool,
    /// 입력할 때마다 번역
    pub live_translate: bool,
    /// GUI 실시간 번역 지연(ms)
    pub live_debounce_ms: u64,
    /// CJK 글꼴 경로(선택)
    pub font_path: Option<String>,
    pub window_alpha: f32,
    pub ui_scale: f32,
    /// RUST_LOG가 없을 때 쓰는 로그 수준
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui_language: "auto".into(),
            language_pack_dir: None,
            menu_languages: languages::default_menu(),
            default_source: "en".into(),
            default_target: "zh-cn".into(),
            translate_endpoint: translate::DEFAULT_ENDPOINT.into(),
            request_timeout_secs: 15,
            max_chunk_chars: translate::DEFAULT_MAX_CHUNK_CHARS,
            accept_invalid_certs: true,
            live_translate: true,
            live_debounce_ms: 600,
            font_path: None,
            window_alpha: 1.0,
            ui_scale: 1.0,
            log_level: "info".into(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 메뉴 언어 정의 오류
    #[error("메뉴 언어 설정 오류: {0}")]
    Registry(#[from] RegistryError),
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장하고 돌려준다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 로드한 경로에 설정을 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }

    /// 메뉴 언어 정의를 검증해 레지스트리를 만든다.
    pub fn registry(&self) -> Result<LanguageRegistry, ConfigError> {
        Ok(LanguageRegistry::new(&self.menu_languages)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn live_debounce(&self) -> Duration {
        Duration::from_millis(self.live_debounce_ms)
    }
}
