//! 단위 접미사가 붙은 입력 문자열을 기준 단위의 숫자로 정규화한다.

use thiserror::Error;

use crate::quantity::Quantity;

/// 접미사 제거 후 남은 문자열을 숫자로 해석할 수 없을 때 발생한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or missing input for {quantity}: {input:?}")]
pub struct ParseError {
    pub quantity: Quantity,
    pub input: String,
}

/// `raw_text` 를 `quantity` 의 기준 단위 값으로 해석한다.
///
/// 앞뒤 공백을 제거한 뒤, 끝에 붙은 단위 표기(대소문자 무시, 앞쪽 공백 허용)를
/// 한 번만 떼어내고 나머지를 `f64` 로 파싱한다. 단위가 없어도 된다.
/// 빈 문자열, 숫자가 아닌 문자, 여러 개의 숫자, 무한대/NaN 은 모두 [`ParseError`].
pub fn parse(raw_text: &str, quantity: Quantity) -> Result<f64, ParseError> {
    let number = strip_unit_suffix(raw_text.trim(), quantity);
    let err = || ParseError {
        quantity,
        input: raw_text.to_string(),
    };
    if number.is_empty() {
        return Err(err());
    }
    let value: f64 = number.parse().map_err(|_| err())?;
    if !value.is_finite() {
        return Err(err());
    }
    Ok(value)
}

fn strip_unit_suffix(text: &str, quantity: Quantity) -> &str {
    for suffix in quantity.accepted_suffixes() {
        let Some(split) = text.len().checked_sub(suffix.len()) else {
            continue;
        };
        // 멀티바이트 문자 중간이면 get 이 None 을 돌려준다
        match text.get(split..) {
            Some(tail) if tail.eq_ignore_ascii_case(suffix) => {
                return text[..split].trim_end();
            }
            _ => {}
        }
    }
    text
}
