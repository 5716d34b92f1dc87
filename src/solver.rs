//! PV = nRT 를 목표 물리량에 대해 정리한 네 가지 공식.

use thiserror::Error;

use crate::quantity::Quantity;

/// 기체 상수 R [atm·L/(mol·K)].
pub const GAS_CONSTANT: f64 = 0.0821;

/// 계산을 진행할 수 없을 때의 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// 분모(부피, 압력, R·T, n·R 중 하나)가 정확히 0
    #[error("division by zero while solving for {target}")]
    DivisionByZero { target: Quantity },
    /// 필요한 기지값이 없음
    #[error("missing input: {0}")]
    MissingInput(Quantity),
    /// 유한한 입력이지만 결과가 f64 범위를 벗어남
    #[error("result out of range while solving for {target}")]
    OutOfRange { target: Quantity },
}

/// 기준 단위로 정규화된 기지값 모음.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Knowns {
    values: [Option<f64>; 4],
}

impl Knowns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, quantity: Quantity, value: f64) {
        self.values[slot(quantity)] = Some(value);
    }

    pub fn with(mut self, quantity: Quantity, value: f64) -> Self {
        self.insert(quantity, value);
        self
    }

    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        self.values[slot(quantity)]
    }

    fn require(&self, quantity: Quantity) -> Result<f64, SolveError> {
        self.get(quantity).ok_or(SolveError::MissingInput(quantity))
    }
}

impl FromIterator<(Quantity, f64)> for Knowns {
    fn from_iter<I: IntoIterator<Item = (Quantity, f64)>>(iter: I) -> Self {
        let mut knowns = Knowns::new();
        for (q, v) in iter {
            knowns.insert(q, v);
        }
        knowns
    }
}

fn slot(quantity: Quantity) -> usize {
    match quantity {
        Quantity::Pressure => 0,
        Quantity::Volume => 1,
        Quantity::Moles => 2,
        Quantity::Temperature => 3,
    }
}

/// `target` 을 나머지 세 값으로부터 계산한다. 결과는 반올림하지 않는다.
///
/// `knowns` 에 `target` 값이 들어 있어도 무시한다. 부호나 물리적 타당성은
/// 검사하지 않으며, 분모가 정확히 0 이면 [`SolveError::DivisionByZero`],
/// 결과가 유한하지 않으면 [`SolveError::OutOfRange`].
pub fn solve(target: Quantity, knowns: &Knowns) -> Result<f64, SolveError> {
    use Quantity::*;

    // require 호출 순서 = ALL 순서 (첫 번째 누락값 보고)
    let (numerator, denominator) = match target {
        Pressure => {
            let v = knowns.require(Volume)?;
            let n = knowns.require(Moles)?;
            let t = knowns.require(Temperature)?;
            (n * GAS_CONSTANT * t, v)
        }
        Volume => {
            let p = knowns.require(Pressure)?;
            let n = knowns.require(Moles)?;
            let t = knowns.require(Temperature)?;
            (n * GAS_CONSTANT * t, p)
        }
        Moles => {
            let p = knowns.require(Pressure)?;
            let v = knowns.require(Volume)?;
            let t = knowns.require(Temperature)?;
            (p * v, GAS_CONSTANT * t)
        }
        Temperature => {
            let p = knowns.require(Pressure)?;
            let v = knowns.require(Volume)?;
            let n = knowns.require(Moles)?;
            (p * v, n * GAS_CONSTANT)
        }
    };

    if denominator == 0.0 {
        return Err(SolveError::DivisionByZero { target });
    }
    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(SolveError::OutOfRange { target });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64, tol: f64) -> bool {
        (actual - expected).abs() <= tol
    }

    #[test]
    fn pressure_of_one_mole_at_stp() {
        let knowns = Knowns::new()
            .with(Quantity::Moles, 1.0)
            .with(Quantity::Temperature, 273.0)
            .with(Quantity::Volume, 22.4);
        let p = solve(Quantity::Pressure, &knowns).unwrap();
        assert!(close(p, 1.0, 0.01), "p={p}");
    }

    #[test]
    fn each_formula_matches_hand_calculation() {
        let k = Knowns::new()
            .with(Quantity::Pressure, 2.0)
            .with(Quantity::Volume, 10.0)
            .with(Quantity::Moles, 0.5)
            .with(Quantity::Temperature, 300.0);
        let r = GAS_CONSTANT;
        assert_eq!(solve(Quantity::Pressure, &k), Ok((0.5 * r * 300.0) / 10.0));
        assert_eq!(solve(Quantity::Volume, &k), Ok((0.5 * r * 300.0) / 2.0));
        assert_eq!(solve(Quantity::Moles, &k), Ok((2.0 * 10.0) / (r * 300.0)));
        assert_eq!(solve(Quantity::Temperature, &k), Ok((2.0 * 10.0) / (0.5 * r)));
    }

    #[test]
    fn zero_pressure_divides_by_zero_for_volume() {
        let knowns = Knowns::new()
            .with(Quantity::Pressure, 0.0)
            .with(Quantity::Moles, 1.0)
            .with(Quantity::Temperature, 300.0);
        assert_eq!(
            solve(Quantity::Volume, &knowns),
            Err(SolveError::DivisionByZero {
                target: Quantity::Volume
            })
        );
    }

    #[test]
    fn zero_moles_divides_by_zero_for_temperature() {
        let knowns = Knowns::new()
            .with(Quantity::Pressure, 2.0)
            .with(Quantity::Volume, 10.0)
            .with(Quantity::Moles, 0.0);
        assert!(matches!(
            solve(Quantity::Temperature, &knowns),
            Err(SolveError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn zero_temperature_and_zero_volume_are_rejected() {
        let for_moles = Knowns::new()
            .with(Quantity::Pressure, 1.0)
            .with(Quantity::Volume, 1.0)
            .with(Quantity::Temperature, -0.0);
        assert!(solve(Quantity::Moles, &for_moles).is_err());

        let for_pressure = Knowns::new()
            .with(Quantity::Volume, 0.0)
            .with(Quantity::Moles, 1.0)
            .with(Quantity::Temperature, 1.0);
        assert!(solve(Quantity::Pressure, &for_pressure).is_err());
    }

    #[test]
    fn zero_numerator_is_not_an_error() {
        let knowns = Knowns::new()
            .with(Quantity::Volume, 5.0)
            .with(Quantity::Moles, 0.0)
            .with(Quantity::Temperature, 300.0);
        assert_eq!(solve(Quantity::Pressure, &knowns), Ok(0.0));
    }

    #[test]
    fn reports_first_missing_input() {
        let knowns = Knowns::new().with(Quantity::Temperature, 300.0);
        assert_eq!(
            solve(Quantity::Volume, &knowns),
            Err(SolveError::MissingInput(Quantity::Pressure))
        );
    }

    #[test]
    fn target_value_in_knowns_is_ignored() {
        let base = Knowns::new()
            .with(Quantity::Volume, 22.4)
            .with(Quantity::Moles, 1.0)
            .with(Quantity::Temperature, 273.0);
        let with_target = base.with(Quantity::Pressure, 99.0);
        assert_eq!(
            solve(Quantity::Pressure, &base),
            solve(Quantity::Pressure, &with_target)
        );
    }

    #[test]
    fn overflowing_result_is_out_of_range() {
        let knowns = Knowns::new()
            .with(Quantity::Pressure, 1e200)
            .with(Quantity::Volume, 1e200)
            .with(Quantity::Moles, 1.0);
        assert_eq!(
            solve(Quantity::Temperature, &knowns),
            Err(SolveError::OutOfRange {
                target: Quantity::Temperature
            })
        );
    }

    #[test]
    fn negative_values_pass_through() {
        let knowns = Knowns::new()
            .with(Quantity::Volume, -10.0)
            .with(Quantity::Moles, 1.0)
            .with(Quantity::Temperature, 300.0);
        let p = solve(Quantity::Pressure, &knowns).unwrap();
        assert!(p < 0.0);
    }

    #[test]
    fn solving_twice_gives_identical_output() {
        let knowns: Knowns = [
            (Quantity::Pressure, 1.3),
            (Quantity::Volume, 7.7),
            (Quantity::Temperature, 311.0),
        ]
        .into_iter()
        .collect();
        let first = solve(Quantity::Moles, &knowns).unwrap();
        let second = solve(Quantity::Moles, &knowns).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
