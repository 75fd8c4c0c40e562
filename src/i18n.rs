use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::extract::ExtractError;
use crate::session::PanelError;
use crate::translate::TranslateError;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const AUTO_DETECT: &str = "general.auto_detect";
    pub const TLS_NOTICE: &str = "general.tls_notice";
    pub const BACKEND_NOTICE: &str = "general.backend_notice";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_TEXT: &str = "main_menu.text";
    pub const MAIN_MENU_DOCUMENT: &str = "main_menu.document";
    pub const MAIN_MENU_WEBSITE: &str = "main_menu.website";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const TEXT_HEADING: &str = "text.heading";
    pub const TEXT_OPTIONS: &str = "text.options";
    pub const TEXT_SOURCE: &str = "text.source";
    pub const TEXT_TARGET: &str = "text.target";
    pub const TEXT_INPUT: &str = "text.input";
    pub const PROMPT_INPUT_TEXT: &str = "prompt.input_text";
    pub const PROMPT_LANGUAGE: &str = "prompt.language";

    pub const RESULT_TRANSLATED: &str = "result.translated";
    pub const RESULT_DETECTED: &str = "result.detected";

    pub const DOCUMENT_HEADING: &str = "document.heading";
    pub const PROMPT_FILE_PATH: &str = "prompt.file_path";
    pub const DOCUMENT_CONTENT: &str = "document.content";

    pub const WEBSITE_HEADING: &str = "website.heading";
    pub const PROMPT_URL: &str = "prompt.url";
    pub const WEBSITE_EXTRACTED: &str = "website.extracted";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_LIVE: &str = "settings.live_translate";
    pub const SETTINGS_UI_LANGUAGE: &str = "settings.ui_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_TRANSLATION_UNAVAILABLE: &str = "error.translation_unavailable";
    pub const ERROR_DECODE: &str = "error.decode";
    pub const ERROR_UNSUPPORTED_DOCUMENT: &str = "error.unsupported_document";
    pub const ERROR_UNSUPPORTED_FILE_TYPE: &str = "error.unsupported_file_type";
    pub const ERROR_EXTRACTION_FAILED: &str = "error.extraction_failed";
    pub const ERROR_INVALID_URL: &str = "error.invalid_url";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Zh,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Zh
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Zh => "zh-cn",
            Language::En => "en-us",
        }
    }
}

/// 런타임 UI 문자열 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Localizer {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Localizer {
    /// 언어 코드(zh/en)에 따라 생성한다. 알 수 없는 코드는 중국어로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 문자열이 없으면 중국어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| zh(key)).to_string(),
            Language::Zh => zh(key).to_string(),
        }
    }

    pub fn describe_translate_error(&self, err: &TranslateError) -> String {
        match err {
            TranslateError::TranslationUnavailable(detail) => {
                format!("{}: {detail}", self.t(keys::ERROR_TRANSLATION_UNAVAILABLE))
            }
        }
    }

    pub fn describe_extract_error(&self, err: &ExtractError) -> String {
        let (key, detail) = match err {
            ExtractError::DecodeError(e) => (keys::ERROR_DECODE, e.to_string()),
            ExtractError::UnsupportedDocument(d) => (keys::ERROR_UNSUPPORTED_DOCUMENT, d.clone()),
            ExtractError::UnsupportedFileType(d) => (keys::ERROR_UNSUPPORTED_FILE_TYPE, d.clone()),
            ExtractError::ExtractionFailed(d) => (keys::ERROR_EXTRACTION_FAILED, d.clone()),
            ExtractError::InvalidUrl(d) => (keys::ERROR_INVALID_URL, d.clone()),
        };
        format!("{}: {detail}", self.t(key))
    }

    pub fn describe_panel_error(&self, err: &PanelError) -> String {
        match err {
            PanelError::Extract(e) => self.describe_extract_error(e),
            PanelError::Translate(e) => self.describe_translate_error(e),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "zh-cn".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("zh") => Some("zh-cn".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "zh" => Some("zh-cn".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "zh-cn" | "zh" => parse_toml_to_map(include_str!("../locales/zh-cn.toml")),
        _ => None,
    }
}

fn zh(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "错误",
        APP_EXIT => "程序已退出。",
        AUTO_DETECT => "自动检测",
        TLS_NOTICE => "注意: 提取网站内容时不验证 TLS 证书，无法发现中间人攻击。",
        BACKEND_NOTICE => "注: 本工具使用Google翻译API进行翻译。",
        MAIN_MENU_TITLE => "\n=== 多功能翻译工具 ===",
        MAIN_MENU_TEXT => "1) 文字",
        MAIN_MENU_DOCUMENT => "2) 文档",
        MAIN_MENU_WEBSITE => "3) 网站",
        MAIN_MENU_SETTINGS => "4) 设置",
        MAIN_MENU_EXIT => "0) 退出",
        PROMPT_MENU_SELECT => "选择菜单: ",
        PROMPT_SELECT => "选择: ",
        INVALID_SELECTION_RETRY => "输入无效，请重新选择。",
        TEXT_HEADING => "\n-- 文字 --",
        TEXT_OPTIONS => "1) 输入文本  2) 翻译  3) 清空  4) 转换  5) 源语言  6) 目标语言  0) 返回",
        TEXT_SOURCE => "源语言:",
        TEXT_TARGET => "目标语言:",
        TEXT_INPUT => "输入:",
        PROMPT_INPUT_TEXT => "在此输入文本: ",
        PROMPT_LANGUAGE => "语言编号: ",
        RESULT_TRANSLATED => "翻译结果:",
        RESULT_DETECTED => "检测到的源语言:",
        DOCUMENT_HEADING => "\n-- 文档 --",
        PROMPT_FILE_PATH => "文档路径 (.txt/.docx): ",
        DOCUMENT_CONTENT => "文档内容:",
        WEBSITE_HEADING => "\n-- 网站 --",
        PROMPT_URL => "输入网站URL: ",
        WEBSITE_EXTRACTED => "提取的文本:",
        SETTINGS_HEADING => "\n-- 设置 --",
        SETTINGS_LIVE => "实时翻译:",
        SETTINGS_UI_LANGUAGE => "界面语言:",
        SETTINGS_OPTIONS => "1) 切换实时翻译  2) 界面语言 (auto/zh-cn/en-us)  0) 返回",
        SETTINGS_SAVED => "设置已保存。",
        ERROR_TRANSLATION_UNAVAILABLE => "翻译服务不可用",
        ERROR_DECODE => "文本编码错误",
        ERROR_UNSUPPORTED_DOCUMENT => "无法读取文档",
        ERROR_UNSUPPORTED_FILE_TYPE => "不支持的文件类型",
        ERROR_EXTRACTION_FAILED => "提取网站内容时出错",
        ERROR_INVALID_URL => "请输入有效的网站URL",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        AUTO_DETECT => "Auto-detect",
        TLS_NOTICE => "Note: TLS certificates are not verified when fetching websites; man-in-the-middle attacks are not detected.",
        BACKEND_NOTICE => "Note: translations are provided by the Google Translate API.",
        MAIN_MENU_TITLE => "\n=== Translation Toolbox ===",
        MAIN_MENU_TEXT => "1) Text",
        MAIN_MENU_DOCUMENT => "2) Document",
        MAIN_MENU_WEBSITE => "3) Website",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        TEXT_HEADING => "\n-- Text --",
        TEXT_OPTIONS => "1) Enter text  2) Translate  3) Clear  4) Swap  5) Source  6) Target  0) Back",
        TEXT_SOURCE => "Source:",
        TEXT_TARGET => "Target:",
        TEXT_INPUT => "Input:",
        PROMPT_INPUT_TEXT => "Enter text: ",
        PROMPT_LANGUAGE => "Language number: ",
        RESULT_TRANSLATED => "Translation:",
        RESULT_DETECTED => "Detected source language:",
        DOCUMENT_HEADING => "\n-- Document --",
        PROMPT_FILE_PATH => "Document path (.txt/.docx): ",
        DOCUMENT_CONTENT => "Document content:",
        WEBSITE_HEADING => "\n-- Website --",
        PROMPT_URL => "Website URL: ",
        WEBSITE_EXTRACTED => "Extracted text:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_LIVE => "Live translate:",
        SETTINGS_UI_LANGUAGE => "UI language:",
        SETTINGS_OPTIONS => "1) Toggle live translate  2) UI language (auto/zh-cn/en-us)  0) Back",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_TRANSLATION_UNAVAILABLE => "Translation service unavailable",
        ERROR_DECODE => "Text encoding error",
        ERROR_UNSUPPORTED_DOCUMENT => "Cannot read document",
        ERROR_UNSUPPORTED_FILE_TYPE => "Unsupported file type",
        ERROR_EXTRACTION_FAILED => "Failed to extract website content",
        ERROR_INVALID_URL => "Please enter a valid website URL",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("en", Some("zh-cn")), "en-us");
        assert_eq!(resolve_language("auto", Some("zh-TW")), "zh-cn");
    }

    #[test]
    fn locale_strings_are_normalized() {
        assert_eq!(normalize_locale_string("zh_CN.UTF-8").as_deref(), Some("zh-cn"));
        assert_eq!(normalize_locale_string("en-GB").as_deref(), Some("en-us"));
        assert_eq!(normalize_locale_string("ko_KR"), None);
    }

    #[test]
    fn built_in_packs_parse() {
        let zh = Localizer::new_with_pack("zh-cn", None);
        assert_eq!(zh.lookup("gui.tab.text").as_deref(), Some("文字"));
        let en = Localizer::new_with_pack("en-us", None);
        assert_eq!(en.lookup("gui.tab.text").as_deref(), Some("Text"));
    }

    #[test]
    fn english_falls_back_to_builtin_table() {
        let tr = Localizer::new("en");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
        assert_eq!(Localizer::new("zh").t("no.such.key"), "[missing translation]");
    }
}
