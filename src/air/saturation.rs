use super::{PsychroError, MOLECULAR_WEIGHT_RATIO};
use crate::quantity::Quantity;
use crate::units::{PressureUnit, RatioUnit, TemperatureUnit};

/// 수증기 포화압을 계산한다 [kPa].
///
/// ASHRAE Fundamentals 상관식을 쓴다. 0°C 미만은 얼음 위, 이상은 물 위 포화압이다.
/// 적용 범위(-100~200°C) 밖의 입력도 검사 없이 계산한다.
pub fn saturation_pressure(t: Quantity) -> Result<Quantity, PsychroError> {
    let t_c = t.value_in(TemperatureUnit::Celsius)?;
    let t_k = t.value_in(TemperatureUnit::Kelvin)?;

    let ln_pws = if t_c < 0.0 {
        over_ice_ln_pa(t_k)
    } else {
        over_water_ln_pa(t_k)
    };
    Ok(Quantity::pa(ln_pws.exp()).to(PressureUnit::KiloPascal)?)
}

// ln(pws[Pa]), -100 ~ 0°C
fn over_ice_ln_pa(t: f64) -> f64 {
    const C01: f64 = -5674.5359;
    const C02: f64 = 6.3925247;
    const C03: f64 = -9.677843e-3;
    const C04: f64 = 6.2215701e-7;
    const C05: f64 = 2.0747825e-9;
    const C06: f64 = -9.484024e-13;
    const C07: f64 = 4.1635019;
    C01 / t + C02 + C03 * t + C04 * t.powi(2) + C05 * t.powi(3) + C06 * t.powi(4) + C07 * t.ln()
}

// ln(pws[Pa]), 0 ~ 200°C
fn over_water_ln_pa(t: f64) -> f64 {
    const C08: f64 = -5800.2206;
    const C09: f64 = 1.3914993;
    const C10: f64 = -4.8640239e-2;
    const C11: f64 = 4.1764768e-5;
    const C12: f64 = -1.4452093e-8;
    const C13: f64 = 6.5459673;
    C08 / t + C09 + C10 * t + C11 * t.powi(2) + C12 * t.powi(3) + C13 * t.ln()
}

/// 전압과 습도비로 수증기 분압을 계산한다 [kPa].
///
/// `pw = p·W / (0.621945 + W)`
pub fn partial_pressure(p: Quantity, w: Quantity) -> Result<Quantity, PsychroError> {
    let p = p.value_in(PressureUnit::KiloPascal)?;
    let w = w.value_in(RatioUnit::Fraction)?;
    Ok(Quantity::kpa(p * w / (MOLECULAR_WEIGHT_RATIO + w)))
}
