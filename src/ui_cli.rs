use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::form::{self, GasForm};
use crate::i18n::{keys, Translator};
use crate::quantity::Quantity;

/// 프롬프트 입출력 대상. 실제 실행은 stdin/stdout, 테스트는 메모리 버퍼를 쓴다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `None`.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// 대상 선택 메뉴의 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetChoice {
    Target(Quantity),
    Exit,
}

/// 결과 출력 후 메뉴의 선택지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterResult {
    Again,
    Reset,
    ChangeTarget,
    Exit,
}

/// 계산할 물리량을 고른다. 잘못된 입력은 다시 묻는다.
pub fn choose_target<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
) -> Result<TargetChoice, AppError> {
    console.say(&tr.t(keys::MENU_HEADING))?;
    console.say(&tr.t(keys::FORM_CHOOSE_TARGET))?;
    console.say(&tr.t(keys::MENU_TARGET_OPTIONS))?;
    loop {
        let Some(sel) = console.read_line(&tr.t(keys::PROMPT_SELECT))? else {
            return Ok(TargetChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(TargetChoice::Target(Quantity::Pressure)),
            "2" => return Ok(TargetChoice::Target(Quantity::Volume)),
            "3" => return Ok(TargetChoice::Target(Quantity::Moles)),
            "4" => return Ok(TargetChoice::Target(Quantity::Temperature)),
            "0" => return Ok(TargetChoice::Exit),
            _ => console.say(&tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 목표를 제외한 세 물리량 값을 입력받아 폼에 채운다. EOF 면 false.
pub fn read_knowns<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    form: &mut GasForm,
    tr: &Translator,
) -> Result<bool, AppError> {
    for quantity in form.target().others() {
        let prompt = tr.t_with(
            keys::PROMPT_VALUE,
            &[
                ("quantity", form::quantity_label(quantity, tr)),
                ("unit", quantity.unit_symbol().to_string()),
            ],
        );
        match console.read_line(&prompt)? {
            Some(text) => form.set_field(quantity, text),
            None => return Ok(false),
        }
    }
    Ok(true)
}

/// 계산을 실행하고 결과 또는 오류 메시지를 출력한다.
pub fn show_outcome<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    form: &mut GasForm,
    tr: &Translator,
) -> Result<(), AppError> {
    let line = match form.submit(tr) {
        Ok(_) => format!("{} {}", tr.t(keys::RESULT_LABEL), form.field(form.target())),
        Err(_) => form.status().unwrap_or_default().to_string(),
    };
    console.say(&line)
}

pub fn after_result<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
) -> Result<AfterResult, AppError> {
    console.say(&tr.t(keys::MENU_AFTER_RESULT))?;
    loop {
        let Some(sel) = console.read_line(&tr.t(keys::PROMPT_SELECT))? else {
            return Ok(AfterResult::Exit);
        };
        match sel.trim().to_lowercase().as_str() {
            "c" => return Ok(AfterResult::Again),
            "r" => return Ok(AfterResult::Reset),
            "t" => return Ok(AfterResult::ChangeTarget),
            "0" => return Ok(AfterResult::Exit),
            _ => console.say(&tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::run_interactive;
    use crate::config::Config;

    fn run_script(script: &str, lang: &str) -> String {
        let mut console = Console::new(script.as_bytes(), Vec::new());
        run_interactive(&mut console, &Config::default(), &Translator::new(lang)).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn computes_pressure_then_exits() {
        let out = run_script("1\n22.4 L\n1 mol\n273 K\n0\n", "en");
        assert!(out.contains("Volume [L]: "), "{out}");
        assert!(out.contains("Result: 1.00 atm"), "{out}");
        assert!(out.contains("Exiting application."), "{out}");
    }

    #[test]
    fn invalid_menu_choice_reprompts() {
        let out = run_script("9\n4\n1\n22.4\n1\n0\n", "en");
        assert!(out.contains("Invalid input. Please try again."), "{out}");
        assert!(out.contains("Result: 272.84 K"), "{out}");
    }

    #[test]
    fn bad_value_shows_generic_message_and_allows_retry() {
        let out = run_script("2\n1 atm\nabc\n300 K\nc\n1 atm\n1 mol\n300 K\n0\n", "en");
        assert!(out.contains("Invalid/Missing input!"), "{out}");
        assert!(out.contains("Result: 24.63 liters"), "{out}");
    }

    #[test]
    fn division_by_zero_is_reported_with_cause() {
        let out = run_script("3\n1\n1\n0\n0\n", "en");
        assert!(out.contains("Error: division by zero while solving for Moles"), "{out}");
    }

    #[test]
    fn change_target_and_eof_exit_cleanly() {
        let out = run_script("1\n22.4\n1\n273\nt\n2\n", "ko");
        assert!(out.contains("계산 결과: 1.00 atm"), "{out}");
        assert!(out.contains("프로그램을 종료합니다."), "{out}");
    }
}
