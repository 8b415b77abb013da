use serde::{Deserialize, Serialize};

/// 절대압 단위. 내부 기준은 kPa(abs)이다.
///
/// 습공기 계산은 항상 절대압을 다루므로 게이지 단위는 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    MilliBar,
    Psi,
    Atm,
    MmHg,
    InHg,
}

const ATM_KPA: f64 = 101.325;
const KPA_PER_PSI: f64 = 6.894_757;
const KPA_PER_MMHG: f64 = 0.133_322_4;
const KPA_PER_INHG: f64 = 3.386_389;

impl PressureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::Psi => "psia",
            PressureUnit::Atm => "atm",
            PressureUnit::MmHg => "mmHg",
            PressureUnit::InHg => "inHg",
        }
    }
}

/// 주어진 압력을 kPa 로 변환한다.
pub fn to_kpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value / 1000.0,
        PressureUnit::KiloPascal => value,
        PressureUnit::MegaPascal => value * 1000.0,
        PressureUnit::Bar => value * 100.0,
        PressureUnit::MilliBar => value / 10.0,
        PressureUnit::Psi => value * KPA_PER_PSI,
        PressureUnit::Atm => value * ATM_KPA,
        PressureUnit::MmHg => value * KPA_PER_MMHG,
        PressureUnit::InHg => value * KPA_PER_INHG,
    }
}

/// kPa 값을 원하는 단위로 변환한다.
pub fn from_kpa(value_kpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_kpa * 1000.0,
        PressureUnit::KiloPascal => value_kpa,
        PressureUnit::MegaPascal => value_kpa / 1000.0,
        PressureUnit::Bar => value_kpa / 100.0,
        PressureUnit::MilliBar => value_kpa * 10.0,
        PressureUnit::Psi => value_kpa / KPA_PER_PSI,
        PressureUnit::Atm => value_kpa / ATM_KPA,
        PressureUnit::MmHg => value_kpa / KPA_PER_MMHG,
        PressureUnit::InHg => value_kpa / KPA_PER_INHG,
    }
}
