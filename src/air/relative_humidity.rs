use super::humidity_ratio::humidity_ratio_from_wet_bulb;
use super::saturation::{partial_pressure, saturation_pressure};
use super::PsychroError;
use crate::quantity::Quantity;
use crate::units::PressureUnit;

/// 건구/습구온도로 상대습도를 계산한다 [%].
pub fn relative_humidity_from_wet_bulb(
    t_db: Quantity,
    t_wb: Quantity,
    p: Quantity,
) -> Result<Quantity, PsychroError> {
    let w = humidity_ratio_from_wet_bulb(t_db, t_wb, p)?;
    relative_humidity_from_humidity_ratio(t_db, w, p)
}

/// 건구온도와 습도비로 상대습도를 계산한다 [%].
///
/// 0~100 % 범위는 검사하지 않는다. 과포화 입력은 100 %를 넘는 값으로 나온다.
pub fn relative_humidity_from_humidity_ratio(
    t_db: Quantity,
    w: Quantity,
    p: Quantity,
) -> Result<Quantity, PsychroError> {
    let p_ws = saturation_pressure(t_db)?.value_in(PressureUnit::KiloPascal)?;
    let p_w = partial_pressure(p, w)?.value_in(PressureUnit::KiloPascal)?;
    Ok(Quantity::percent(100.0 * p_w / p_ws))
}
