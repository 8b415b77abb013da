use super::PsychroError;
use crate::quantity::Quantity;
use crate::units::LengthUnit;

/// 표준대기 압력 [kPa].
///
/// `p = 101.325·(1 − 2.25577e-5·Z)^5.2559`, Z는 해발고도[m]. 약 11 km(대류권)까지 유효하다.
pub fn standard_pressure(elevation: Quantity) -> Result<Quantity, PsychroError> {
    let z = elevation.value_in(LengthUnit::Meter)?;
    Ok(Quantity::kpa(101.325 * (1.0 - z * 2.25577e-5).powf(5.2559)))
}

/// 표준대기 온도 [°C]. `t = 15 − 0.0065·Z`
pub fn standard_temperature(elevation: Quantity) -> Result<Quantity, PsychroError> {
    let z = elevation.value_in(LengthUnit::Meter)?;
    Ok(Quantity::celsius(15.0 - 0.0065 * z))
}
