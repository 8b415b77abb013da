//! 단위 정의 및 변환 모듈 모음.

pub mod density;
pub mod length;
pub mod pressure;
pub mod ratio;
pub mod specific_enthalpy;
pub mod temperature;

pub use density::DensityUnit;
pub use length::LengthUnit;
pub use pressure::PressureUnit;
pub use ratio::RatioUnit;
pub use specific_enthalpy::SpecificEnthalpyUnit;
pub use temperature::{TemperatureDiffUnit, TemperatureUnit};
