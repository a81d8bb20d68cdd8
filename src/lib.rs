//! 내연기관 성능 추정 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 사용한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod engine;
pub mod i18n;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;
