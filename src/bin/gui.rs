#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::time::Instant;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use translation_toolbox::{
    app::{AppError, Services},
    config, extract,
    form::{FormAction, SourceSelection},
    i18n::{self, keys, Localizer},
    languages::{LanguageRegistry, MenuLanguage},
    live::Debouncer,
    logging,
    session::{Session, TranslatedOutput},
};

#[derive(Debug, Parser)]
#[command(name = "translation_toolbox", version, about = "문자/문서/웹 번역 도구")]
struct GuiArgs {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// UI 언어(auto/zh-cn/en-us)
    #[arg(short = 'L', long)]
    lang: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let mut app_cfg = match config::load_or_create(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Config error: {e}");
            config::Config::default()
        }
    };
    logging::init(&app_cfg.log_level);
    if let Some(lang_cli) = args.lang {
        app_cfg.ui_language = i18n::resolve_language(&lang_cli, Some(app_cfg.ui_language.as_str()));
    }

    let app = match GuiApp::new(app_cfg, args.config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("failed to start: {e}");
            return Ok(());
        }
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1000.0, 700.0))
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let font_path = app.config.font_path.clone();
    eframe::run_native(
        "Translation Toolbox",
        options,
        Box::new(move |cc| {
            let loaded = match font_path.as_deref() {
                Some(p) => load_custom_font(&cc.egui_ctx, p),
                None => setup_fonts(&cc.egui_ctx),
            };
            if let Err(e) = loaded {
                tracing::warn!("font: {e}");
            }
            cc.egui_ctx.set_pixels_per_point(app.ui_scale);
            Box::new(app)
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 편집할 수 없는 여러 줄 결과 칸.
fn readonly_text(ui: &mut egui::Ui, text: &str, rows: usize) {
    let mut shown = text;
    ui.add(
        egui::TextEdit::multiline(&mut shown)
            .desired_rows(rows)
            .desired_width(f32::INFINITY),
    );
}

/// 감지된 소스 언어 한 줄. 감지 결과가 없으면 아무것도 그리지 않는다.
fn detected_line(ui: &mut egui::Ui, label: &str, registry: &LanguageRegistry, detected: Option<&str>) {
    if let Some(code) = detected {
        ui.label(format!("{label} {}", registry.name_for(code)));
    }
}

fn output_block(
    ui: &mut egui::Ui,
    tr: &Localizer,
    registry: &LanguageRegistry,
    output: &TranslatedOutput,
) {
    if output.text().is_empty() {
        return;
    }
    ui.label(tr.t(keys::RESULT_TRANSLATED));
    readonly_text(ui, output.text(), 8);
    detected_line(ui, &tr.t(keys::RESULT_DETECTED), registry, output.detected());
}

/// 메뉴 언어 콤보. 새로 고른 항목이 있으면 돌려준다.
fn target_combo(
    ui: &mut egui::Ui,
    id: &str,
    registry: &LanguageRegistry,
    current: &MenuLanguage,
) -> Option<MenuLanguage> {
    let mut picked = None;
    egui::ComboBox::from_id_source(id)
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for m in registry.menu() {
                if ui.selectable_label(m == current, m.label()).clicked() && m != current {
                    picked = Some(m.clone());
                }
            }
        });
    picked
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tab {
    Text,
    Document,
    Website,
}

struct GuiApp {
    config: config::Config,
    /// 설정을 읽어 온 파일. 저장도 여기에 한다.
    config_path: PathBuf,
    tr: Localizer,
    services: Services,
    session: Session,
    tab: Tab,
    /// 텍스트 탭 입력 칸과 묶인 버퍼
    input_buffer: String,
    debouncer: Debouncer,
    text_error: Option<String>,
    document_error: Option<String>,
    website_error: Option<String>,
    show_settings_modal: bool,
    show_help_modal: bool,
    lang_input: String,
    font_path_input: String,
    settings_status: Option<String>,
    window_alpha: f32,
    ui_scale: f32,
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 중국어를 표시하기 위해 시스템 CJK 폰트를 찾아 적용한다.
/// 1) assets/fonts/ 아래 폰트
/// 2) OS별 시스템 폰트(Windows 雅黑/宋体, macOS 苹方, Linux Noto CJK/文泉驿)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/NotoSansSC-Regular.otf".into(),
        "assets/fonts/msyh.ttc".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["msyh.ttc", "msyh.ttf", "simhei.ttf", "simsun.ttc"] {
            candidates.push(fonts.join(name));
        }
    }
    for p in [
        "/System/Library/Fonts/PingFang.ttc",
        "/System/Library/Fonts/STHeiti Light.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    ] {
        candidates.push(p.into());
    }

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            tracing::debug!(path = %p.display(), "font loaded");
            return Ok(());
        }
    }

    // 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("CJK font not found. Please set a user font (.ttf/.ttc/.otf) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

impl GuiApp {
    fn new(config: config::Config, config_path: PathBuf) -> Result<Self, AppError> {
        let lang_code = i18n::resolve_language(&config.ui_language, None);
        let tr = Localizer::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::info!(
            lang = %lang_code,
            overrides_loaded = tr.lookup("gui.nav.app_title").is_some(),
            "GUI language resolved"
        );
        let services = Services::from_config(&config)?;
        let session = Session::from_config(&services.registry, &config);
        Ok(Self {
            tr,
            session,
            services,
            tab: Tab::Text,
            input_buffer: String::new(),
            debouncer: Debouncer::new(config.live_debounce()),
            text_error: None,
            document_error: None,
            website_error: None,
            show_settings_modal: false,
            show_help_modal: false,
            lang_input: config.ui_language.clone(),
            font_path_input: config.font_path.clone().unwrap_or_default(),
            settings_status: None,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            ui_scale: config.ui_scale.clamp(0.8, 1.6),
            config,
            config_path,
        })
    }

    /// 텍스트 탭 전이를 적용하고 입력 버퍼를 폼 상태에 맞춘다.
    fn apply_text(&mut self, action: FormAction) {
        let transition = self.session.text.apply(action, &self.services.context());
        self.session.text = transition.state;
        self.text_error = transition
            .error
            .map(|e| self.tr.describe_translate_error(&e));
        if self.input_buffer != self.session.text.input_text() {
            self.input_buffer = self.session.text.input_text().to_string();
        }
    }

    /// 대기 중인 실시간 번역을 처리한다.
    fn poll_live(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.debouncer.fire(now) {
            let text = self.input_buffer.clone();
            self.apply_text(FormAction::EditInput(text));
        } else if let Some(rest) = self.debouncer.remaining(now) {
            ctx.request_repaint_after(rest);
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Text, txt("gui.tab.text", "Text")),
            (Tab::Document, txt("gui.tab.document", "Document")),
            (Tab::Website, txt("gui.tab.website", "Website")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch tab"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_text(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.text.heading", "Text translation"),
            &txt(
                "gui.text.tip",
                "Type text on the left. With live translate on, it is translated after a short pause.",
            ),
        );
        ui.add_space(8.0);

        let mut action: Option<FormAction> = None;
        let mut edited = false;
        let registry = &self.services.registry;
        let auto_label = tr.t(keys::AUTO_DETECT);

        ui.columns(2, |cols| {
            // 왼쪽: 소스 언어 + 입력
            let ui = &mut cols[0];
            ui.horizontal(|ui| {
                label_with_tip(
                    ui,
                    &tr.t(keys::TEXT_SOURCE),
                    &txt("gui.text.source_tip", "Auto-detect lets the service guess the language"),
                );
                let current = self.session.text.source();
                let selected_text = match current {
                    SourceSelection::AutoDetect => auto_label.clone(),
                    SourceSelection::Language(m) => m.label().to_string(),
                };
                egui::ComboBox::from_id_source("text_source")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        let auto = SourceSelection::AutoDetect;
                        if ui.selectable_label(*current == auto, auto_label.as_str()).clicked() && *current != auto {
                            action = Some(FormAction::SelectSource(auto));
                        }
                        for m in registry.menu() {
                            let option = SourceSelection::Language(m.clone());
                            if ui.selectable_label(*current == option, m.label()).clicked()
                                && *current != option
                            {
                                action = Some(FormAction::SelectSource(option));
                            }
                        }
                    });
            });
            let resp = ui.add(
                egui::TextEdit::multiline(&mut self.input_buffer)
                    .hint_text(txt("gui.text.input_hint", "Enter text here"))
                    .desired_rows(10)
                    .desired_width(f32::INFINITY),
            );
            edited = resp.changed();
            if ui.button(txt("gui.text.clear", "Clear")).clicked() {
                action = Some(FormAction::Clear);
            }

            // 오른쪽: 대상 언어 + 결과
            let ui = &mut cols[1];
            ui.horizontal(|ui| {
                ui.label(tr.t(keys::TEXT_TARGET));
                if let Some(m) = target_combo(ui, "text_target", registry, self.session.text.target()) {
                    action = Some(FormAction::SelectTarget(m));
                }
            });
            readonly_text(ui, self.session.text.translated_text(), 10);
            ui.horizontal(|ui| {
                if ui.button(txt("gui.text.translate", "Translate")).clicked() {
                    action = Some(FormAction::Translate);
                }
                if ui
                    .button(txt("gui.text.swap", "Swap"))
                    .on_hover_text(txt(
                        "gui.text.swap_tip",
                        "Swap languages; when there is input, swap input and result too",
                    ))
                    .clicked()
                {
                    action = Some(FormAction::Swap);
                }
            });
            detected_line(
                ui,
                &tr.t(keys::RESULT_DETECTED),
                registry,
                self.session.text.detected(),
            );
        });

        if edited {
            self.session.text = self.session.text.with_input(self.input_buffer.clone());
            if self.config.live_translate {
                self.debouncer.touch(Instant::now());
            }
        }
        if let Some(action) = action {
            if matches!(action, FormAction::Translate | FormAction::Clear | FormAction::Swap) {
                self.debouncer.cancel();
            }
            self.apply_text(action);
        }
        if let Some(err) = &self.text_error {
            ui.colored_label(egui::Color32::RED, err.as_str());
        }
        ui.add_space(8.0);
        ui.small(tr.t(keys::BACKEND_NOTICE));
    }

    fn ui_document(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.document.heading", "Document translation"),
            &txt("gui.document.tip", "Upload a .txt or .docx file; its language is detected automatically."),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button(txt("gui.document.upload", "Upload document")).clicked() {
                let picked = FileDialog::new()
                    .add_filter(&txt("gui.document.filter", "Documents"), &["txt", "docx"])
                    .pick_file();
                if let Some(path) = picked {
                    self.document_error = match fs::read(&path) {
                        Ok(bytes) => {
                            let name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_default();
                            self.session
                                .document
                                .load(&name, &bytes, extract::mime_for_path(&path))
                                .err()
                                .map(|e| tr.describe_extract_error(&e))
                        }
                        Err(e) => Some(format!("{}: {e}", tr.t(keys::ERROR_PREFIX))),
                    };
                }
            }
            if let Some(name) = self.session.document.file_name() {
                ui.label(name);
            }
        });

        if self.session.document.file_name().is_some() {
            ui.label(tr.t(keys::DOCUMENT_CONTENT));
            readonly_text(ui, self.session.document.content(), 8);
            ui.horizontal(|ui| {
                ui.label(txt("gui.document.target", "Target language:"));
                if let Some(m) = target_combo(
                    ui,
                    "doc_target",
                    &self.services.registry,
                    self.session.document.target(),
                ) {
                    self.session.document.select_target(m);
                }
            });
            if ui.button(txt("gui.document.translate", "Translate document")).clicked() {
                self.document_error = self
                    .session
                    .document
                    .translate(&self.services.context())
                    .err()
                    .map(|e| tr.describe_translate_error(&e));
            }
            output_block(ui, &tr, &self.services.registry, self.session.document.output());
        }
        if let Some(err) = &self.document_error {
            ui.colored_label(egui::Color32::RED, err.as_str());
        }
    }

    fn ui_website(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.website.heading", "Website translation"),
            &txt("gui.website.tip", "Fetch a page, keep its visible text and translate it."),
        );
        ui.add_space(8.0);

        egui::Grid::new("web_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(txt("gui.website.url", "Website URL"));
                ui.add(
                    egui::TextEdit::singleline(&mut self.session.website.url)
                        .hint_text("https://")
                        .desired_width(420.0),
                );
                ui.end_row();

                ui.label(txt("gui.website.target", "Target language:"));
                if let Some(m) = target_combo(
                    ui,
                    "web_target",
                    &self.services.registry,
                    self.session.website.target(),
                ) {
                    self.session.website.select_target(m);
                }
                ui.end_row();
            });
        ui.small(tr.t(keys::TLS_NOTICE));

        if ui.button(txt("gui.website.run", "Extract and translate")).clicked() {
            self.website_error = self
                .session
                .website
                .extract_and_translate(&self.services.pages, &self.services.context())
                .err()
                .map(|e| tr.describe_panel_error(&e));
        }
        if let Some(err) = &self.website_error {
            ui.colored_label(egui::Color32::RED, err.as_str());
        }
        if !self.session.website.extracted().is_empty() {
            ui.label(tr.t(keys::WEBSITE_EXTRACTED));
            readonly_text(ui, self.session.website.extracted(), 8);
        }
        output_block(ui, &tr, &self.services.registry, self.session.website.output());
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_live(ctx);

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Translation Toolbox"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    if ui
                        .checkbox(
                            &mut self.config.live_translate,
                            txt("gui.settings.live", "Translate while typing"),
                        )
                        .changed()
                        && !self.config.live_translate
                    {
                        self.debouncer.cancel();
                    }
                    ui.label(txt("gui.settings.debounce", "Live translate delay"));
                    let delay = egui::Slider::new(&mut self.config.live_debounce_ms, 0..=3000).suffix(" ms");
                    if ui.add(delay).changed() {
                        self.debouncer.set_delay(self.config.live_debounce());
                    }
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Font file (.ttf/.ttc/.otf)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.font_path_input);
                        if ui.button(txt("gui.settings.browse", "Browse")).clicked() {
                            if let Some(p) = FileDialog::new()
                                .add_filter("Font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.font_path_input = p.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_apply", "Apply")).clicked() {
                            self.settings_status = Some(match load_custom_font(ctx, &self.font_path_input) {
                                Ok(()) => {
                                    self.config.font_path = Some(self.font_path_input.clone());
                                    txt("gui.settings.font_applied", "Font applied.")
                                }
                                Err(e) => e,
                            });
                        }
                    });

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Interface language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), txt("gui.settings.lang_auto", "System"));
                            ui.selectable_value(&mut self.lang_input, "zh-cn".into(), "中文（简体）");
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                        });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.ui_language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        self.config.ui_scale = self.ui_scale;
                        // 즉시 UI 언어 반영
                        let resolved = i18n::resolve_language(&self.config.ui_language, None);
                        self.tr = Localizer::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
                        self.settings_status = Some(match self.config.save_to(&self.config_path) {
                            Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
                            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
                        });
                    }
                    if let Some(msg) = &self.settings_status {
                        ui.label(msg);
                    }
                });
        }

        // 도움말 모달
        if self.show_help_modal {
            let backend_notice = self.tr.t(keys::BACKEND_NOTICE);
            let tls_notice = self.tr.t(keys::TLS_NOTICE);
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(txt("gui.about.app", "Translate text, documents and websites"));
                    ui.label(format!(
                        "{} {}",
                        txt("gui.about.version", "Version:"),
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.separator();
                    ui.label(txt("gui.about.text", "Text: pick languages, type, then Translate. Swap exchanges the languages."));
                    ui.label(txt("gui.about.document", "Document: .txt (UTF-8) and .docx are supported."));
                    ui.label(txt("gui.about.website", "Website: only the visible text of the page is translated."));
                    ui.separator();
                    ui.label(backend_notice);
                    ui.label(tls_notice);
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(120.0)
            .default_width(160.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Text => self.ui_text(ui),
                    Tab::Document => self.ui_document(ui),
                    Tab::Website => self.ui_website(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> GuiApp {
        GuiApp::new(config::Config::default(), PathBuf::from(config::DEFAULT_CONFIG_PATH)).unwrap()
    }

    #[test]
    fn args_accept_config_path_and_language() {
        let args = GuiArgs::parse_from(["translation_toolbox", "--config", "run/other.toml", "-L", "en"]);
        assert_eq!(args.config, PathBuf::from("run/other.toml"));
        assert_eq!(args.lang.as_deref(), Some("en"));

        let args = GuiArgs::parse_from(["translation_toolbox"]);
        assert_eq!(args.config, PathBuf::from(config::DEFAULT_CONFIG_PATH));
        assert!(args.lang.is_none());
    }

    #[test]
    fn new_app_starts_on_text_tab_with_config_languages() {
        let app = test_app();
        assert_eq!(app.tab, Tab::Text);
        assert_eq!(app.session.text.source().code(), "en");
        assert_eq!(app.session.text.target().code(), "zh-cn");
        assert!(app.input_buffer.is_empty());
        assert!(!app.debouncer.is_pending());
    }

    #[test]
    fn clear_resets_input_buffer() {
        let mut app = test_app();
        app.input_buffer = "hello".into();
        app.session.text = app.session.text.with_input("hello");
        app.apply_text(FormAction::Clear);
        assert!(app.input_buffer.is_empty());
        assert!(app.session.text.translated_text().is_empty());
        assert_eq!(app.session.text.target().code(), "zh-cn");
        assert!(app.text_error.is_none());
    }

    #[test]
    fn swap_without_input_only_exchanges_languages() {
        let mut app = test_app();
        app.apply_text(FormAction::Swap);
        assert_eq!(app.session.text.source().code(), "zh-cn");
        assert_eq!(app.session.text.target().code(), "en");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn panels_start_empty() {
        let app = test_app();
        assert!(app.session.document.file_name().is_none());
        assert!(app.session.website.url.is_empty());
        assert!(app.session.website.output().text().is_empty());
    }
}
