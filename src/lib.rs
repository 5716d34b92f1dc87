//! 이상기체 법칙(PV = nRT) 계산 코어를 라이브러리로 분리하여 CLI 와 GUI 가 함께 사용한다.

pub mod app;
pub mod calculation;
pub mod config;
pub mod form;
pub mod i18n;
pub mod logging;
pub mod normalize;
pub mod quantity;
pub mod solver;
pub mod ui_cli;
