//! 습공기(psychrometric) 상태량 계산 모듈 모음.
//!
//! 모든 함수는 단위가 붙은 `Quantity`를 받아 기대 단위로 변환한 뒤 계산하고,
//! 결과에 단위를 붙여 돌려준다. 상관식은 ASHRAE Fundamentals(SI) 를 따른다.

pub mod atmosphere;
pub mod density;
pub mod dew_point;
pub mod enthalpy;
pub mod error;
pub mod humidity_ratio;
pub mod relative_humidity;
pub mod saturation;
pub mod state;
pub mod wet_bulb;

pub use atmosphere::{standard_pressure, standard_temperature};
pub use density::{dry_air_density, moist_air_density};
pub use dew_point::dew_point;
pub use enthalpy::moist_air_enthalpy;
pub use error::PsychroError;
pub use humidity_ratio::{humidity_ratio_from_rh, humidity_ratio_from_wet_bulb};
pub use relative_humidity::{
    relative_humidity_from_humidity_ratio, relative_humidity_from_wet_bulb,
};
pub use saturation::{partial_pressure, saturation_pressure};
pub use state::{pressure_at_elevation, MoistAirState};
pub use wet_bulb::{solve_wet_bulb, wet_bulb, WetBulbOptions, WetBulbSolution};

use crate::quantity::Quantity;

/// 수증기/건공기 분자량 비 (18.015268 / 28.966)
pub const MOLECULAR_WEIGHT_RATIO: f64 = 0.621945;

/// 전압을 따로 주지 않을 때 쓰는 기본값 [kPa].
pub const DEFAULT_PRESSURE_KPA: f64 = 101.0;

pub fn default_pressure() -> Quantity {
    Quantity::kpa(DEFAULT_PRESSURE_KPA)
}
