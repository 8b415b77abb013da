use super::saturation::saturation_pressure;
use super::{PsychroError, MOLECULAR_WEIGHT_RATIO};
use crate::quantity::Quantity;
use crate::units::{PressureUnit, RatioUnit, TemperatureUnit};

/// 건구/습구온도와 전압으로 습도비를 계산한다 [kg/kg].
///
/// 습구온도에서의 포화 습도비 Ws를 구한 뒤 ASHRAE 단열포화 관계식으로 W를 얻는다.
/// 건구온도가 0°C 이상이면 물, 미만이면 얼음 잠열 계수를 쓴다.
pub fn humidity_ratio_from_wet_bulb(
    t_db: Quantity,
    t_wb: Quantity,
    p: Quantity,
) -> Result<Quantity, PsychroError> {
    let p_ws = saturation_pressure(t_wb)?.value_in(PressureUnit::KiloPascal)?;
    let p = p.value_in(PressureUnit::KiloPascal)?;
    let t_db = t_db.value_in(TemperatureUnit::Celsius)?;
    let t_wb = t_wb.value_in(TemperatureUnit::Celsius)?;

    let ws = MOLECULAR_WEIGHT_RATIO * p_ws / (p - p_ws);
    let w = if t_db >= 0.0 {
        ((2501.0 - 2.326 * t_wb) * ws - 1.006 * (t_db - t_wb))
            / (2501.0 + 1.86 * t_db - 4.186 * t_wb)
    } else {
        ((2830.0 - 0.24 * t_wb) * ws - 1.006 * (t_db - t_wb)) / (2830.0 + 1.86 * t_db - 2.1 * t_wb)
    };
    Ok(Quantity::ratio(w))
}

/// 건구온도와 상대습도, 전압으로 습도비를 계산한다 [kg/kg].
///
/// `pw = RH·pws(tdb)`, `W = 0.621945·pw / (p − pw)`
pub fn humidity_ratio_from_rh(
    t_db: Quantity,
    rh: Quantity,
    p: Quantity,
) -> Result<Quantity, PsychroError> {
    let p_ws = saturation_pressure(t_db)?.value_in(PressureUnit::KiloPascal)?;
    let rh_pct = rh.value_in(RatioUnit::Percent)?;
    let p = p.value_in(PressureUnit::KiloPascal)?;

    let p_w = rh_pct * p_ws / 100.0;
    Ok(Quantity::ratio(MOLECULAR_WEIGHT_RATIO * p_w / (p - p_w)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn saturated_air_has_equal_ratios() {
        // tWB = tDB 이면 포화 상태이므로 두 식이 같은 W를 준다
        let p = Quantity::kpa(101.325);
        let t = Quantity::celsius(25.0);
        let from_wb = humidity_ratio_from_wet_bulb(t, t, p).unwrap().value();
        let from_rh = humidity_ratio_from_rh(t, Quantity::percent(100.0), p)
            .unwrap()
            .value();
        assert_abs_diff_eq!(from_wb, from_rh, epsilon = 1e-12);
    }

    #[test]
    fn ashrae_example_above_freezing() {
        let w = humidity_ratio_from_wet_bulb(
            Quantity::celsius(20.0),
            Quantity::celsius(15.0),
            Quantity::kpa(101.325),
        )
        .unwrap();
        assert_abs_diff_eq!(w.value(), 0.008575, epsilon = 1e-5);
    }

    #[test]
    fn below_freezing_uses_ice_coefficients() {
        let w = humidity_ratio_from_wet_bulb(
            Quantity::celsius(-5.0),
            Quantity::celsius(-6.0),
            Quantity::kpa(101.325),
        )
        .unwrap();
        assert_abs_diff_eq!(w.value(), 0.001915, epsilon = 1e-5);
    }

    #[test]
    fn relative_humidity_accepts_fraction_units() {
        let p = Quantity::kpa(101.325);
        let t = Quantity::celsius(26.7);
        let pct = humidity_ratio_from_rh(t, Quantity::percent(50.0), p).unwrap();
        let frac = humidity_ratio_from_rh(t, Quantity::ratio(0.5), p).unwrap();
        assert_abs_diff_eq!(pct.value(), frac.value(), epsilon = 1e-15);
        assert_abs_diff_eq!(pct.value(), 0.010946, epsilon = 1e-5);
    }
}
