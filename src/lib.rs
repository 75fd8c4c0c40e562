//! 번역 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 상태 전이를 공유한다.

pub mod app;
pub mod config;
pub mod extract;
pub mod form;
pub mod i18n;
pub mod languages;
pub mod live;
pub mod logging;
pub mod session;
pub mod translate;
pub mod ui_cli;
