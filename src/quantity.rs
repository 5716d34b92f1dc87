use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// PV = nRT 에 등장하는 네 가지 물리량.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Pressure,
    Volume,
    Moles,
    Temperature,
}

impl Quantity {
    /// 고정 순서. 입력 정규화도 이 순서를 따른다.
    pub const ALL: [Quantity; 4] = [
        Quantity::Pressure,
        Quantity::Volume,
        Quantity::Moles,
        Quantity::Temperature,
    ];

    /// 내부 기준 단위 기호 (atm, L, mol, K).
    pub fn unit_symbol(self) -> &'static str {
        match self {
            Quantity::Pressure => "atm",
            Quantity::Volume => "L",
            Quantity::Moles => "mol",
            Quantity::Temperature => "K",
        }
    }

    /// 결과 표시용 단위 라벨. 모두 입력 접미사로도 허용된다.
    pub fn display_unit(self) -> &'static str {
        match self {
            Quantity::Pressure => "atm",
            Quantity::Volume => "liters",
            Quantity::Moles => "moles",
            Quantity::Temperature => "K",
        }
    }

    /// 입력 문자열 끝에서 허용하는 단위 표기 (소문자, 긴 표기 먼저).
    pub fn accepted_suffixes(self) -> &'static [&'static str] {
        match self {
            Quantity::Pressure => &["atm"],
            Quantity::Volume => &["liters", "l"],
            Quantity::Moles => &["moles", "mol"],
            Quantity::Temperature => &["kelvin", "k"],
        }
    }

    /// 자신을 제외한 나머지 세 물리량을 `ALL` 순서로 반환한다.
    pub fn others(self) -> impl Iterator<Item = Quantity> {
        Quantity::ALL.into_iter().filter(move |q| *q != self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Pressure => "Pressure",
            Quantity::Volume => "Volume",
            Quantity::Moles => "Moles",
            Quantity::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 알 수 없는 물리량 이름.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quantity: {0} (expected pressure, volume, moles or temperature)")]
pub struct UnknownQuantity(pub String);

impl FromStr for Quantity {
    type Err = UnknownQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pressure" | "p" => Ok(Quantity::Pressure),
            "volume" | "v" => Ok(Quantity::Volume),
            "moles" | "n" => Ok(Quantity::Moles),
            "temperature" | "t" => Ok(Quantity::Temperature),
            _ => Err(UnknownQuantity(s.to_string())),
        }
    }
}

/// 기준 단위로 표현된 값.
///
/// `value` 는 항상 유한한 값이며 부호는 검사하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub quantity: Quantity,
    pub value: f64,
}

impl Measurement {
    pub fn new(quantity: Quantity, value: f64) -> Self {
        Self { quantity, value }
    }

    /// 소수점 `decimals` 자리로 반올림하고 표시 단위를 붙인다. 예: `1.00 atm`.
    pub fn format(&self, decimals: usize) -> String {
        format!(
            "{:.*} {}",
            decimals,
            self.value,
            self.quantity.display_unit()
        )
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.quantity.unit_symbol())
    }
}
