//! 번역 대상 언어 레지스트리.
//!
//! 전체 언어표는 컴파일 시 고정된 정적 테이블이고, UI 메뉴에 노출되는 언어는
//! 그 부분집합이다. 생성 이후에는 읽기 전용이다.

use serde::{Deserialize, Serialize};

/// 자동 감지를 의미하는 소스 언어 코드.
pub const AUTO_CODE: &str = "auto";

/// 레지스트리에 없는 코드를 조회했을 때 돌려주는 이름.
pub const UNKNOWN_LANGUAGE_NAME: &str = "unknown";

/// 전체 언어표의 한 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> LanguageEntry {
    LanguageEntry { code, name }
}

/// Google 번역이 받는 언어 코드 전체 목록.
static ALL_LANGUAGES: &[LanguageEntry] = &[
    lang("af", "afrikaans"),
    lang("sq", "albanian"),
    lang("am", "amharic"),
    lang("ar", "arabic"),
    lang("hy", "armenian"),
    lang("az", "azerbaijani"),
    lang("eu", "basque"),
    lang("be", "belarusian"),
    lang("bn", "bengali"),
    lang("bs", "bosnian"),
    lang("bg", "bulgarian"),
    lang("ca", "catalan"),
    lang("ceb", "cebuano"),
    lang("ny", "chichewa"),
    lang("zh-cn", "chinese (simplified)"),
    lang("zh-tw", "chinese (traditional)"),
    lang("co", "corsican"),
    lang("hr", "croatian"),
    lang("cs", "czech"),
    lang("da", "danish"),
    lang("nl", "dutch"),
    lang("en", "english"),
    lang("eo", "esperanto"),
    lang("et", "estonian"),
    lang("tl", "filipino"),
    lang("fi", "finnish"),
    lang("fr", "french"),
    lang("fy", "frisian"),
    lang("gl", "galician"),
    lang("ka", "georgian"),
    lang("de", "german"),
    lang("el", "greek"),
    lang("gu", "gujarati"),
    lang("ht", "haitian creole"),
    lang("ha", "hausa"),
    lang("haw", "hawaiian"),
    lang("iw", "hebrew"),
    lang("he", "hebrew"),
    lang("hi", "hindi"),
    lang("hmn", "hmong"),
    lang("hu", "hungarian"),
    lang("is", "icelandic"),
    lang("ig", "igbo"),
    lang("id", "indonesian"),
    lang("ga", "irish"),
    lang("it", "italian"),
    lang("ja", "japanese"),
    lang("jw", "javanese"),
    lang("kn", "kannada"),
    lang("kk", "kazakh"),
    lang("km", "khmer"),
    lang("ko", "korean"),
    lang("ku", "kurdish (kurmanji)"),
    lang("ky", "kyrgyz"),
    lang("lo", "lao"),
    lang("la", "latin"),
    lang("lv", "latvian"),
    lang("lt", "lithuanian"),
    lang("lb", "luxembourgish"),
    lang("mk", "macedonian"),
    lang("mg", "malagasy"),
    lang("ms", "malay"),
    lang("ml", "malayalam"),
    lang("mt", "maltese"),
    lang("mi", "maori"),
    lang("mr", "marathi"),
    lang("mn", "mongolian"),
    lang("my", "myanmar (burmese)"),
    lang("ne", "nepali"),
    lang("no", "norwegian"),
    lang("or", "odia"),
    lang("ps", "pashto"),
    lang("fa", "persian"),
    lang("pl", "polish"),
    lang("pt", "portuguese"),
    lang("pa", "punjabi"),
    lang("ro", "romanian"),
    lang("ru", "russian"),
    lang("sm", "samoan"),
    lang("gd", "scots gaelic"),
    lang("sr", "serbian"),
    lang("st", "sesotho"),
    lang("sn", "shona"),
    lang("sd", "sindhi"),
    lang("si", "sinhala"),
    lang("sk", "slovak"),
    lang("sl", "slovenian"),
    lang("so", "somali"),
    lang("es", "spanish"),
    lang("su", "sundanese"),
    lang("sw", "swahili"),
    lang("sv", "swedish"),
    lang("tg", "tajik"),
    lang("ta", "tamil"),
    lang("te", "telugu"),
    lang("th", "thai"),
    lang("tr", "turkish"),
    lang("uk", "ukrainian"),
    lang("ur", "urdu"),
    lang("ug", "uyghur"),
    lang("uz", "uzbek"),
    lang("vi", "vietnamese"),
    lang("cy", "welsh"),
    lang("xh", "xhosa"),
    lang("yi", "yiddish"),
    lang("yo", "yoruba"),
    lang("zu", "zulu"),
];

/// 설정 파일에 기록되는 메뉴 언어 정의.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLanguageConfig {
    pub code: String,
    pub label: String,
}

/// 기본 메뉴: 중국어(간체), 영어.
pub fn default_menu() -> Vec<MenuLanguageConfig> {
    vec![
        MenuLanguageConfig {
            code: "zh-cn".into(),
            label: "中文（简体）".into(),
        },
        MenuLanguageConfig {
            code: "en".into(),
            label: "English".into(),
        },
    ]
}

/// 메뉴에서 선택 가능한 언어. 코드는 항상 전체 언어표에 존재한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLanguage {
    code: &'static str,
    label: String,
}

impl MenuLanguage {
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// 레지스트리 구성 오류.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("메뉴 언어 코드가 언어표에 없습니다: {0}")]
    UnknownMenuLanguage(String),
    #[error("메뉴 언어 이름이 중복되었습니다: {0}")]
    DuplicateLabel(String),
    #[error("메뉴 언어가 비어 있습니다")]
    EmptyMenu,
}

/// 전체 언어표와 메뉴 부분집합을 묶은 읽기 전용 레지스트리.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    menu: Vec<MenuLanguage>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self {
            menu: vec![
                MenuLanguage {
                    code: "zh-cn",
                    label: "中文（简体）".into(),
                },
                MenuLanguage {
                    code: "en",
                    label: "English".into(),
                },
            ],
        }
    }
}

impl LanguageRegistry {
    /// 메뉴 정의를 검증해 레지스트리를 만든다. 모든 코드는 전체 언어표에 있어야 한다.
    pub fn new(menu: &[MenuLanguageConfig]) -> Result<Self, RegistryError> {
        if menu.is_empty() {
            return Err(RegistryError::EmptyMenu);
        }
        let mut out: Vec<MenuLanguage> = Vec::with_capacity(menu.len());
        for item in menu {
            let code = resolve(&item.code)
                .ok_or_else(|| RegistryError::UnknownMenuLanguage(item.code.clone()))?;
            let label = item.label.trim();
            if out.iter().any(|m| m.label == label) {
                return Err(RegistryError::DuplicateLabel(label.to_string()));
            }
            out.push(MenuLanguage {
                code,
                label: label.to_string(),
            });
        }
        Ok(Self { menu: out })
    }

    /// 전체 언어표.
    pub fn all(&self) -> &'static [LanguageEntry] {
        ALL_LANGUAGES
    }

    pub fn menu(&self) -> &[MenuLanguage] {
        &self.menu
    }

    /// 코드의 표시 이름. 없으면 [`UNKNOWN_LANGUAGE_NAME`].
    pub fn name_for(&self, code: &str) -> &'static str {
        resolve_entry(code)
            .map(|e| e.name)
            .unwrap_or(UNKNOWN_LANGUAGE_NAME)
    }

    /// 메뉴 이름으로 코드를 찾는다. 메뉴에 없는 이름이면 None.
    pub fn code_for(&self, label: &str) -> Option<&'static str> {
        self.menu_entry(label).map(|m| m.code)
    }

    pub fn menu_entry(&self, label: &str) -> Option<&MenuLanguage> {
        let label = label.trim();
        self.menu.iter().find(|m| m.label == label)
    }

    /// 코드로 메뉴 항목을 찾는다.
    pub fn menu_by_code(&self, code: &str) -> Option<&MenuLanguage> {
        let code = resolve(code)?;
        self.menu.iter().find(|m| m.code == code)
    }

    /// 메뉴의 첫 항목. 생성 시 비어 있지 않음을 보장한다.
    pub fn first_menu(&self) -> &MenuLanguage {
        &self.menu[0]
    }

    /// 전체 언어표에 코드가 있는지.
    pub fn contains(&self, code: &str) -> bool {
        resolve_entry(code).is_some()
    }
}

fn resolve_entry(code: &str) -> Option<&'static LanguageEntry> {
    let code = code.trim().to_ascii_lowercase();
    ALL_LANGUAGES.iter().find(|e| e.code == code)
}

/// 대소문자를 무시하고 코드를 언어표의 정적 코드로 바꾼다.
pub fn resolve(code: &str) -> Option<&'static str> {
    resolve_entry(code).map(|e| e.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut codes: Vec<_> = ALL_LANGUAGES.iter().map(|e| e.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(before, codes.len());
    }

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(resolve("zh-CN"), Some("zh-cn"));
        assert_eq!(resolve(" EN "), Some("en"));
        assert_eq!(resolve("auto"), None);
    }

    #[test]
    fn default_matches_default_menu_config() {
        let built = LanguageRegistry::new(&default_menu()).unwrap();
        assert_eq!(built.menu(), LanguageRegistry::default().menu());
    }
}
