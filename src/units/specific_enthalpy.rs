use serde::{Deserialize, Serialize};

/// 비엔탈피 단위. 내부 기준은 kJ/kg(건공기)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificEnthalpyUnit {
    KjPerKg,
    KcalPerKg,
    BtuPerPound,
}

impl SpecificEnthalpyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            SpecificEnthalpyUnit::KjPerKg => "kJ/kg",
            SpecificEnthalpyUnit::KcalPerKg => "kcal/kg",
            SpecificEnthalpyUnit::BtuPerPound => "Btu/lb",
        }
    }
}

pub fn to_kj_per_kg(value: f64, unit: SpecificEnthalpyUnit) -> f64 {
    match unit {
        SpecificEnthalpyUnit::KjPerKg => value,
        SpecificEnthalpyUnit::KcalPerKg => value * 4.184,
        SpecificEnthalpyUnit::BtuPerPound => value * 2.326,
    }
}

pub fn from_kj_per_kg(value: f64, unit: SpecificEnthalpyUnit) -> f64 {
    match unit {
        SpecificEnthalpyUnit::KjPerKg => value,
        SpecificEnthalpyUnit::KcalPerKg => value / 4.184,
        SpecificEnthalpyUnit::BtuPerPound => value / 2.326,
    }
}
