use tracing::trace;

use super::saturation::partial_pressure;
use super::PsychroError;
use crate::quantity::Quantity;
use crate::units::PressureUnit;

/// 전압과 습도비로 노점온도를 계산한다 [°C].
///
/// 기본 상관식 결과가 0°C 이상이면 그대로 쓰고, 음수가 나오면 얼음 위 상관식 결과로
/// 통째로 바꾼다. 분기 기준은 입력 온도가 아니라 기본 상관식의 결과이다.
pub fn dew_point(p: Quantity, w: Quantity) -> Result<Quantity, PsychroError> {
    const C14: f64 = 6.54;
    const C15: f64 = 14.526;
    const C16: f64 = 0.7389;
    const C17: f64 = 0.09486;
    const C18: f64 = 0.4569;

    let p_w = partial_pressure(p, w)?.value_in(PressureUnit::KiloPascal)?;
    let alpha = p_w.ln();

    let t_dp =
        C14 + C15 * alpha + C16 * alpha.powi(2) + C17 * alpha.powi(3) + C18 * p_w.powf(0.1984);
    if t_dp >= 0.0 {
        return Ok(Quantity::celsius(t_dp));
    }

    let t_frost = 6.09 + 12.608 * alpha + 0.4959 * alpha.powi(2);
    trace!(
        primary = t_dp,
        replaced = t_frost,
        "dew point below freezing"
    );
    Ok(Quantity::celsius(t_frost))
}
