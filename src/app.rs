use std::io::{BufRead, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::calculation::{self, CalculationError, CalculationRequest};
use crate::config::{self, Config, ConfigError};
use crate::form::{self, GasForm};
use crate::i18n::{self, Translator};
use crate::quantity::Quantity;
use crate::ui_cli::{self, AfterResult, Console, TargetChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    /// 사용자에게 보여줄 현지화된 메시지.
    pub fn user_message(&self, tr: &Translator) -> String {
        match self {
            AppError::Calculation(err) => form::error_message(err, tr),
            other => format!("{}: {other}", tr.t(i18n::keys::ERROR_PREFIX)),
        }
    }
}

/// 설정 파일을 로드한다. 실패는 [`AppError::Config`] 로 돌려준다.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, AppError> {
    Ok(config::load_or_default(path)?)
}

/// 한 번의 계산을 실행하고 표시용 결과 문자열을 돌려준다.
///
/// `inputs` 에서 목표 물리량 항목은 무시된다. 값이 `None` 인 물리량은 요청에서
/// 빠지므로 계산기가 [`crate::solver::SolveError::MissingInput`] 으로 보고한다.
pub fn run_solve(
    target: Quantity,
    inputs: &[(Quantity, Option<String>)],
    config: &Config,
) -> Result<String, AppError> {
    let request = inputs
        .iter()
        .filter(|(quantity, _)| *quantity != target)
        .filter_map(|(quantity, text)| text.as_deref().map(|t| (*quantity, t)))
        .fold(CalculationRequest::new(target), |req, (q, t)| req.with(q, t));
    let result = calculation::calculate(&request)?;
    Ok(result.format(config.decimal_places))
}

/// CLI 대화형 메인 루프를 실행한다. 입력이 끝나거나(EOF) 종료를 선택하면 반환한다.
pub fn run_interactive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
    tr: &Translator,
) -> Result<(), AppError> {
    let mut form = GasForm::new(config.default_target, config.decimal_places);
    loop {
        let target = match ui_cli::choose_target(console, tr)? {
            TargetChoice::Target(q) => q,
            TargetChoice::Exit => break,
        };
        form.select_target(target);
        debug!(%target, "target selected");

        'calc: loop {
            if !ui_cli::read_knowns(console, &mut form, tr)? {
                break 'calc;
            }
            ui_cli::show_outcome(console, &mut form, tr)?;
            loop {
                match ui_cli::after_result(console, tr)? {
                    AfterResult::Again => continue 'calc,
                    AfterResult::Reset => {
                        form.clear();
                        console.say(&tr.t(i18n::keys::MENU_RESET_DONE))?;
                        continue 'calc;
                    }
                    AfterResult::ChangeTarget => break 'calc,
                    AfterResult::Exit => {
                        console.say(&tr.t(i18n::keys::APP_EXIT))?;
                        return Ok(());
                    }
                }
            }
        }
    }
    console.say(&tr.t(i18n::keys::APP_EXIT))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolveError;

    fn inputs(
        p: Option<&str>,
        v: Option<&str>,
        n: Option<&str>,
        t: Option<&str>,
    ) -> Vec<(Quantity, Option<String>)> {
        vec![
            (Quantity::Pressure, p.map(String::from)),
            (Quantity::Volume, v.map(String::from)),
            (Quantity::Moles, n.map(String::from)),
            (Quantity::Temperature, t.map(String::from)),
        ]
    }

    #[test]
    fn solve_returns_formatted_result() {
        let out = run_solve(
            Quantity::Pressure,
            &inputs(None, Some("22.4 L"), Some("1 mol"), Some("273 K")),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(out, "1.00 atm");
    }

    #[test]
    fn solve_ignores_value_given_for_target() {
        let out = run_solve(
            Quantity::Moles,
            &inputs(Some("1 atm"), Some("22.4 L"), Some("junk"), Some("273 K")),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(out, "1.00 moles");
    }

    #[test]
    fn missing_value_is_a_calculation_error() {
        let err = run_solve(
            Quantity::Volume,
            &inputs(Some("1"), None, None, Some("300")),
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Calculation(CalculationError::Solve(_))));
        assert_eq!(
            err.user_message(&Translator::default()),
            "Error: missing input: Moles"
        );
    }

    #[test]
    fn omitted_value_is_missing_not_invalid() {
        let err = run_solve(
            Quantity::Volume,
            &[
                (Quantity::Pressure, Some("1".to_string())),
                (Quantity::Temperature, Some("300".to_string())),
            ],
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Calculation(CalculationError::Solve(SolveError::MissingInput(
                Quantity::Moles
            )))
        ));
    }

    #[test]
    fn empty_value_is_still_invalid_input() {
        let err = run_solve(
            Quantity::Volume,
            &inputs(Some("1"), None, Some(""), Some("300")),
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Calculation(CalculationError::Parse(_))));
    }

    #[test]
    fn decimal_places_come_from_config() {
        let cfg = Config {
            decimal_places: 4,
            ..Default::default()
        };
        let out = run_solve(
            Quantity::Temperature,
            &inputs(Some("1 atm"), Some("22.4 L"), Some("1 mol"), None),
            &cfg,
        )
        .unwrap();
        assert_eq!(out, "272.8380 K");
    }

    #[test]
    fn malformed_config_is_an_app_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "decimal_places = [1, 2]\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Parse(_))));
        assert!(err
            .user_message(&Translator::default())
            .starts_with("Error: configuration error:"));
    }

    #[test]
    fn parse_error_uses_generic_message() {
        let err = run_solve(
            Quantity::Temperature,
            &inputs(Some("1"), Some("5 K"), Some("1"), None),
            &Config::default(),
        )
        .unwrap_err();
        assert_eq!(
            err.user_message(&Translator::default()),
            "Invalid/Missing input! Please enter valid values."
        );
    }
}
