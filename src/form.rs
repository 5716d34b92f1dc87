//! 입력 폼 상태. GUI/CLI 가 공유하며 계산 코어는 상태를 갖지 않는다.

use crate::calculation::{self, CalculationError, CalculationRequest};
use crate::i18n::{keys, Translator};
use crate::quantity::{Measurement, Quantity};

/// 목표 물리량, 네 개의 입력칸, 상태 메시지를 보관한다.
#[derive(Debug, Clone, PartialEq)]
pub struct GasForm {
    target: Quantity,
    fields: [String; 4],
    status: Option<String>,
    decimals: usize,
}

impl GasForm {
    pub fn new(target: Quantity, decimals: usize) -> Self {
        Self {
            target,
            fields: Default::default(),
            status: None,
            decimals,
        }
    }

    pub fn target(&self) -> Quantity {
        self.target
    }

    /// 목표 물리량을 바꾸면 모든 입력과 메시지를 지운다. 같은 값이면 유지한다.
    pub fn select_target(&mut self, target: Quantity) {
        if target != self.target {
            self.clear();
            self.target = target;
        }
    }

    /// 목표 물리량 칸만 읽기 전용이다.
    pub fn is_editable(&self, quantity: Quantity) -> bool {
        quantity != self.target
    }

    pub fn field(&self, quantity: Quantity) -> &str {
        &self.fields[index(quantity)]
    }

    /// GUI 위젯이 직접 편집할 수 있도록 입력칸 버퍼를 빌려준다.
    pub fn field_mut(&mut self, quantity: Quantity) -> &mut String {
        &mut self.fields[index(quantity)]
    }

    pub fn set_field(&mut self, quantity: Quantity, text: impl Into<String>) {
        if self.is_editable(quantity) {
            self.fields[index(quantity)] = text.into();
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn request(&self) -> CalculationRequest {
        self.target
            .others()
            .fold(CalculationRequest::new(self.target), |req, q| {
                req.with(q, self.field(q))
            })
    }

    /// 계산을 실행한다.
    ///
    /// 성공하면 결과 문자열(예: `1.00 atm`)을 목표 칸에 쓰고 메시지를 지운다.
    /// 실패하면 입력칸은 그대로 두고 사용자용 메시지만 설정한다.
    pub fn submit(&mut self, tr: &Translator) -> Result<Measurement, CalculationError> {
        match calculation::calculate(&self.request()) {
            Ok(result) => {
                self.fields[index(self.target)] = result.format(self.decimals);
                self.status = None;
                Ok(result)
            }
            Err(err) => {
                self.status = Some(error_message(&err, tr));
                Err(err)
            }
        }
    }

    /// 모든 입력칸과 메시지를 비운다.
    pub fn clear(&mut self) {
        self.fields.iter_mut().for_each(String::clear);
        self.status = None;
    }
}

/// 파싱 오류는 하나의 일반 메시지로, 계산 오류는 원인을 포함한 메시지로 보여준다.
pub fn error_message(err: &CalculationError, tr: &Translator) -> String {
    match err {
        CalculationError::Parse(_) => tr.t(keys::FORM_INVALID_INPUT),
        CalculationError::Solve(cause) => format!("{}: {cause}", tr.t(keys::ERROR_PREFIX)),
    }
}

pub fn quantity_label(quantity: Quantity, tr: &Translator) -> String {
    tr.t(match quantity {
        Quantity::Pressure => keys::QUANTITY_PRESSURE,
        Quantity::Volume => keys::QUANTITY_VOLUME,
        Quantity::Moles => keys::QUANTITY_MOLES,
        Quantity::Temperature => keys::QUANTITY_TEMPERATURE,
    })
}

pub fn field_label(quantity: Quantity, tr: &Translator) -> String {
    tr.t(match quantity {
        Quantity::Pressure => keys::FIELD_PRESSURE,
        Quantity::Volume => keys::FIELD_VOLUME,
        Quantity::Moles => keys::FIELD_MOLES,
        Quantity::Temperature => keys::FIELD_TEMPERATURE,
    })
}

fn index(quantity: Quantity) -> usize {
    match quantity {
        Quantity::Pressure => 0,
        Quantity::Volume => 1,
        Quantity::Moles => 2,
        Quantity::Temperature => 3,
    }
}
