use super::atmosphere::standard_pressure;
use super::density::{dry_air_density, moist_air_density};
use super::dew_point::dew_point;
use super::enthalpy::moist_air_enthalpy;
use super::humidity_ratio::{humidity_ratio_from_rh, humidity_ratio_from_wet_bulb};
use super::relative_humidity::relative_humidity_from_humidity_ratio;
use super::saturation::{partial_pressure, saturation_pressure};
use super::wet_bulb::{wet_bulb, WetBulbOptions};
use super::PsychroError;
use crate::quantity::Quantity;
use crate::units::{PressureUnit, RatioUnit, TemperatureUnit};

/// 두 가지 상태량으로부터 유도한 습공기 상태 전체.
#[derive(Debug, Clone, PartialEq)]
pub struct MoistAirState {
    /// 건구온도 [°C]
    pub dry_bulb: Quantity,
    /// 습구온도 [°C]. 반복 계산이 수렴하지 않으면 `None`
    pub wet_bulb: Option<Quantity>,
    /// 상대습도 [%]
    pub relative_humidity: Quantity,
    /// 습도비 [kg/kg]
    pub humidity_ratio: Quantity,
    /// 전압 [kPa]
    pub pressure: Quantity,
    /// 건구온도에서의 포화 수증기압 [kPa]
    pub saturation_pressure: Quantity,
    /// 수증기 분압 [kPa]
    pub partial_pressure: Quantity,
    /// 노점온도 [°C]
    pub dew_point: Quantity,
    /// 건공기 밀도 [kg/m³]
    pub dry_air_density: Quantity,
    /// 습공기 밀도 [kg/m³]
    pub moist_air_density: Quantity,
    /// 비엔탈피 [kJ/kg]
    pub enthalpy: Quantity,
}

impl MoistAirState {
    /// 건구온도 + 상대습도. 습구온도는 반복 계산으로 구한다.
    pub fn from_dry_bulb_rh(
        t_db: Quantity,
        rh: Quantity,
        p: Quantity,
        options: &WetBulbOptions,
    ) -> Result<Self, PsychroError> {
        let w = humidity_ratio_from_rh(t_db, rh, p)?;
        let t_wb = wet_bulb(t_db, rh, p, options)?;
        Self::complete(t_db, t_wb, rh.to(RatioUnit::Percent)?, w, p)
    }

    /// 건구온도 + 습구온도. 반복 계산이 필요 없다.
    pub fn from_dry_bulb_wet_bulb(
        t_db: Quantity,
        t_wb: Quantity,
        p: Quantity,
    ) -> Result<Self, PsychroError> {
        let w = humidity_ratio_from_wet_bulb(t_db, t_wb, p)?;
        let rh = relative_humidity_from_humidity_ratio(t_db, w, p)?;
        Self::complete(t_db, Some(t_wb.to(TemperatureUnit::Celsius)?), rh, w, p)
    }

    /// 건구온도 + 습도비. 상대습도를 거쳐 습구온도를 반복 계산한다.
    pub fn from_dry_bulb_humidity_ratio(
        t_db: Quantity,
        w: Quantity,
        p: Quantity,
        options: &WetBulbOptions,
    ) -> Result<Self, PsychroError> {
        let rh = relative_humidity_from_humidity_ratio(t_db, w, p)?;
        let t_wb = wet_bulb(t_db, rh, p, options)?;
        Self::complete(t_db, t_wb, rh, w.to(RatioUnit::Fraction)?, p)
    }

    fn complete(
        t_db: Quantity,
        t_wb: Option<Quantity>,
        rh: Quantity,
        w: Quantity,
        p: Quantity,
    ) -> Result<Self, PsychroError> {
        Ok(Self {
            dry_bulb: t_db.to(TemperatureUnit::Celsius)?,
            wet_bulb: t_wb,
            relative_humidity: rh,
            humidity_ratio: w,
            pressure: p.to(PressureUnit::KiloPascal)?,
            saturation_pressure: saturation_pressure(t_db)?,
            partial_pressure: partial_pressure(p, w)?,
            dew_point: dew_point(p, w)?,
            dry_air_density: dry_air_density(t_db, w, p)?,
            moist_air_density: moist_air_density(t_db, w, p)?,
            enthalpy: moist_air_enthalpy(t_db, w)?,
        })
    }
}

/// 해발고도에서의 표준대기 압력. 기압 측정값이 없을 때 전압으로 쓴다.
pub fn pressure_at_elevation(elevation: Quantity) -> Result<Quantity, PsychroError> {
    standard_pressure(elevation)
}
