use super::PsychroError;
use crate::quantity::Quantity;
use crate::units::{RatioUnit, TemperatureUnit};

/// 습공기 비엔탈피 [kJ/kg 건공기]. 0°C 건공기와 0°C 물을 기준점으로 한다.
///
/// `h = 1.006·t + W·(2501 + 1.86·t)`
pub fn moist_air_enthalpy(t_db: Quantity, w: Quantity) -> Result<Quantity, PsychroError> {
    let t = t_db.value_in(TemperatureUnit::Celsius)?;
    let w = w.value_in(RatioUnit::Fraction)?;
    Ok(Quantity::kj_per_kg(1.006 * t + w * (2501.0 + 1.86 * t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::SpecificEnthalpyUnit;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dry_air_at_zero_is_reference_point() {
        let h = moist_air_enthalpy(Quantity::celsius(0.0), Quantity::ratio(0.0)).unwrap();
        assert_eq!(h.value(), 0.0);
    }

    #[test]
    fn summer_design_point() {
        let h = moist_air_enthalpy(Quantity::celsius(26.7), Quantity::ratio(0.0105)).unwrap();
        assert_abs_diff_eq!(h.value(), 53.642151, epsilon = 1e-6);
        let btu = h.value_in(SpecificEnthalpyUnit::BtuPerPound).unwrap();
        assert_abs_diff_eq!(btu, 53.642151 / 2.326, epsilon = 1e-9);
    }
}
