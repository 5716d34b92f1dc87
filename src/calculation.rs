//! 요청(목표 물리량 + 세 개의 원시 입력) → 정규화 → 계산.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::normalize::{self, ParseError};
use crate::quantity::{Measurement, Quantity};
use crate::solver::{self, Knowns, SolveError};

/// 계산 요청. 목표 물리량을 제외한 세 물리량의 원시 입력 문자열을 담는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRequest {
    pub target: Quantity,
    pub known: BTreeMap<Quantity, String>,
}

impl CalculationRequest {
    pub fn new(target: Quantity) -> Self {
        Self {
            target,
            known: BTreeMap::new(),
        }
    }

    pub fn with(mut self, quantity: Quantity, raw_text: impl Into<String>) -> Self {
        self.known.insert(quantity, raw_text.into());
        self
    }
}

/// 정규화 또는 계산 단계의 오류를 그대로 전달한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// 요청을 처리해 목표 물리량 값을 돌려준다.
///
/// 입력은 `Quantity::ALL` 순서로 정규화하며, 첫 번째 [`ParseError`] 에서 바로
/// 중단한다(계산기는 호출하지 않는다). 목표 물리량에 대한 입력은 무시하고,
/// 빠진 입력은 계산기가 [`SolveError::MissingInput`] 으로 보고한다.
pub fn calculate(request: &CalculationRequest) -> Result<Measurement, CalculationError> {
    debug!(target_quantity = %request.target, known = ?request.known, "calculation requested");

    let mut knowns = Knowns::new();
    for quantity in request.target.others() {
        if let Some(raw) = request.known.get(&quantity) {
            knowns.insert(quantity, normalize::parse(raw, quantity)?);
        }
    }

    let value = solver::solve(request.target, &knowns)?;
    let result = Measurement::new(request.target, value);
    debug!(%result, "calculation finished");
    Ok(result)
}
