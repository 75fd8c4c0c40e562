use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::app::{AppError, Services};
use crate::config::Config;
use crate::extract;
use crate::form::{FormAction, SourceSelection, TextForm};
use crate::i18n::{keys, Localizer};
use crate::languages::{LanguageRegistry, MenuLanguage};
use crate::session::{DocumentPanel, TranslatedOutput, WebsitePanel};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Text,
    Document,
    Website,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Localizer) -> Result<MenuChoice, AppError> {
    main_menu_from(tr, &mut io::stdin().lock())
}

/// 입력이 끝나면 종료를 고른 것으로 본다.
fn main_menu_from(tr: &Localizer, input: &mut impl BufRead) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_TEXT,
        keys::MAIN_MENU_DOCUMENT,
        keys::MAIN_MENU_WEBSITE,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line_from(input, &tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(e) if e.is_end_of_input() => return Ok(MenuChoice::Exit),
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Text),
            "2" => return Ok(MenuChoice::Document),
            "3" => return Ok(MenuChoice::Website),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 텍스트 탭. 메뉴 루프 안에서 폼 상태를 전이시킨다.
pub fn handle_text(
    tr: &Localizer,
    services: &Services,
    cfg: &Config,
    form: &mut TextForm,
) -> Result<(), AppError> {
    let ctx = services.context();
    loop {
        println!("{}", tr.t(keys::TEXT_HEADING));
        print_text_form(tr, &services.registry, form);
        println!("{}", tr.t(keys::TEXT_OPTIONS));
        let sel = read_line(&tr.t(keys::PROMPT_SELECT))?;
        let action = match sel.trim() {
            "1" => {
                let text = read_line(&tr.t(keys::PROMPT_INPUT_TEXT))?;
                let text = text.trim_end_matches(['\r', '\n']).to_string();
                if cfg.live_translate {
                    FormAction::EditInput(text)
                } else {
                    // 번역은 2번에서
                    *form = form.with_input(text);
                    continue;
                }
            }
            "2" => FormAction::Translate,
            "3" => FormAction::Clear,
            "4" => FormAction::Swap,
            "5" => match choose_language(tr, &services.registry, true)? {
                Some(Choice::Auto) => FormAction::SelectSource(SourceSelection::AutoDetect),
                Some(Choice::Language(m)) => FormAction::SelectSource(SourceSelection::Language(m)),
                None => continue,
            },
            "6" => match choose_language(tr, &services.registry, false)? {
                Some(Choice::Language(m)) => FormAction::SelectTarget(m),
                _ => continue,
            },
            "0" => return Ok(()),
            _ => {
                println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                continue;
            }
        };
        let transition = form.apply(action, &ctx);
        *form = transition.state;
        if let Some(err) = transition.error {
            print_error(&tr.describe_translate_error(&err));
        }
    }
}

/// 문서 탭.
pub fn handle_document(
    tr: &Localizer,
    services: &Services,
    panel: &mut DocumentPanel,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DOCUMENT_HEADING));
    let path = read_line(&tr.t(keys::PROMPT_FILE_PATH))?;
    let path = Path::new(path.trim());
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            print_error(&format!("{}: {e}", tr.t(keys::ERROR_PREFIX)));
            return Ok(());
        }
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Err(err) = panel.load(&name, &bytes, extract::mime_for_path(path)) {
        print_error(&tr.describe_extract_error(&err));
        return Ok(());
    }
    println!("{}\n{}", tr.t(keys::DOCUMENT_CONTENT), panel.content());

    if let Some(Choice::Language(m)) = choose_language(tr, &services.registry, false)? {
        panel.select_target(m);
    }
    match panel.translate(&services.context()) {
        Ok(()) => print_output(tr, &services.registry, panel.output()),
        Err(err) => print_error(&tr.describe_translate_error(&err)),
    }
    Ok(())
}

/// 웹 탭.
pub fn handle_website(
    tr: &Localizer,
    services: &Services,
    panel: &mut WebsitePanel,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WEBSITE_HEADING));
    println!("{}", tr.t(keys::TLS_NOTICE));
    panel.url = read_line(&tr.t(keys::PROMPT_URL))?.trim().to_string();
    if let Some(Choice::Language(m)) = choose_language(tr, &services.registry, false)? {
        panel.select_target(m);
    }
    match panel.extract_and_translate(&services.pages, &services.context()) {
        Ok(()) => {
            println!("{}\n{}", tr.t(keys::WEBSITE_EXTRACTED), panel.extracted());
            print_output(tr, &services.registry, panel.output());
        }
        Err(err) => print_error(&tr.describe_panel_error(&err)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true.
pub fn handle_settings(tr: &Localizer, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_LIVE), cfg.live_translate);
    println!("{} {}", tr.t(keys::SETTINGS_UI_LANGUAGE), cfg.ui_language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            cfg.live_translate = !cfg.live_translate;
            Ok(true)
        }
        "2" => {
            let lang = read_line(&tr.t(keys::SETTINGS_UI_LANGUAGE))?;
            let lang = lang.trim().to_lowercase();
            if matches!(lang.as_str(), "auto" | "zh-cn" | "en-us") {
                cfg.ui_language = lang;
                Ok(true)
            } else {
                println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                Ok(false)
            }
        }
        _ => Ok(false),
    }
}

enum Choice {
    Auto,
    Language(MenuLanguage),
}

/// 번호로 메뉴 언어를 고른다. 엔터만 누르면 취소.
fn choose_language(
    tr: &Localizer,
    registry: &LanguageRegistry,
    allow_auto: bool,
) -> Result<Option<Choice>, AppError> {
    if allow_auto {
        println!("0) {}", tr.t(keys::AUTO_DETECT));
    }
    for (i, m) in registry.menu().iter().enumerate() {
        println!("{}) {}", i + 1, m.label());
    }
    let sel = read_line(&tr.t(keys::PROMPT_LANGUAGE))?;
    let sel = sel.trim();
    if sel.is_empty() {
        return Ok(None);
    }
    match sel.parse::<usize>() {
        Ok(0) if allow_auto => Ok(Some(Choice::Auto)),
        Ok(n) if n >= 1 => Ok(registry.menu().get(n - 1).cloned().map(Choice::Language)),
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            Ok(None)
        }
    }
}

fn print_text_form(tr: &Localizer, registry: &LanguageRegistry, form: &TextForm) {
    let source = match form.source() {
        SourceSelection::AutoDetect => tr.t(keys::AUTO_DETECT),
        SourceSelection::Language(m) => m.label().to_string(),
    };
    println!(
        "{} {source}  →  {} {}",
        tr.t(keys::TEXT_SOURCE),
        tr.t(keys::TEXT_TARGET),
        form.target().label()
    );
    if !form.input_text().is_empty() {
        println!("{} {}", tr.t(keys::TEXT_INPUT), form.input_text());
    }
    if !form.translated_text().is_empty() {
        println!("{} {}", tr.t(keys::RESULT_TRANSLATED), form.translated_text());
    }
    if let Some(code) = form.detected() {
        println!("{} {}", tr.t(keys::RESULT_DETECTED), registry.name_for(code));
    }
}

fn print_output(tr: &Localizer, registry: &LanguageRegistry, output: &TranslatedOutput) {
    println!("{}\n{}", tr.t(keys::RESULT_TRANSLATED), output.text());
    if let Some(code) = output.detected() {
        println!("{} {}", tr.t(keys::RESULT_DETECTED), registry.name_for(code));
    }
}

fn print_error(msg: &str) {
    eprintln!("{msg}");
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 한 줄을 읽는다. 입력이 닫혀 있으면 `UnexpectedEof`.
fn read_line_from(input: &mut impl BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}
