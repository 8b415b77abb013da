use serde::{Deserialize, Serialize};

/// 무차원 비율 단위. 습도비(kg/kg)와 상대습도(%)가 같은 계열을 공유한다.
/// 내부 기준은 분율(1.0 = 100 %)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioUnit {
    /// kg/kg 또는 0~1 분율
    Fraction,
    Percent,
    /// g수증기/kg건공기
    GramPerKilogram,
}

impl RatioUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            RatioUnit::Fraction => "kg/kg",
            RatioUnit::Percent => "%",
            RatioUnit::GramPerKilogram => "g/kg",
        }
    }

    fn per_fraction(self) -> f64 {
        match self {
            RatioUnit::Fraction => 1.0,
            RatioUnit::Percent => 100.0,
            RatioUnit::GramPerKilogram => 1000.0,
        }
    }
}

pub fn to_fraction(value: f64, unit: RatioUnit) -> f64 {
    value / unit.per_fraction()
}

pub fn from_fraction(value: f64, unit: RatioUnit) -> f64 {
    value * unit.per_fraction()
}
