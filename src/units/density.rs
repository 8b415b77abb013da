use serde::{Deserialize, Serialize};

/// 밀도 단위. 내부 기준은 kg/m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KgPerCubicMeter,
    GramPerLiter,
    PoundPerCubicFoot,
}

const KG_M3_PER_LB_FT3: f64 = 16.018_463;

impl DensityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KgPerCubicMeter => "kg/m³",
            DensityUnit::GramPerLiter => "g/L",
            DensityUnit::PoundPerCubicFoot => "lb/ft³",
        }
    }
}

pub fn to_kg_per_m3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KgPerCubicMeter | DensityUnit::GramPerLiter => value,
        DensityUnit::PoundPerCubicFoot => value * KG_M3_PER_LB_FT3,
    }
}

pub fn from_kg_per_m3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KgPerCubicMeter | DensityUnit::GramPerLiter => value,
        DensityUnit::PoundPerCubicFoot => value / KG_M3_PER_LB_FT3,
    }
}
