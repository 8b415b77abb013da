use super::PsychroError;
use crate::quantity::Quantity;
use crate::units::{PressureUnit, RatioUnit, TemperatureUnit};

/// 습공기 비체적 [m³/kg 건공기].
///
/// `v = 0.287042·T·(1 + 1.607858·W) / p`
fn specific_volume(t_db: Quantity, w: f64, p: Quantity) -> Result<f64, PsychroError> {
    let t = t_db.value_in(TemperatureUnit::Kelvin)?;
    let p = p.value_in(PressureUnit::KiloPascal)?;
    Ok(0.287042 * t * (1.0 + 1.607858 * w) / p)
}

/// 건공기 밀도 [kg/m³]. 습공기 단위 체적당 건공기 질량이다.
pub fn dry_air_density(
    t_db: Quantity,
    w: Quantity,
    p: Quantity,
) -> Result<Quantity, PsychroError> {
    let v = specific_volume(t_db, w.value_in(RatioUnit::Fraction)?, p)?;
    Ok(Quantity::kg_per_m3(1.0 / v))
}

/// 습공기 밀도 [kg/m³]. 건공기와 수증기 질량을 합한다.
pub fn moist_air_density(
    t_db: Quantity,
    w: Quantity,
    p: Quantity,
) -> Result<Quantity, PsychroError> {
    let w = w.value_in(RatioUnit::Fraction)?;
    let v = specific_volume(t_db, w, p)?;
    Ok(Quantity::kg_per_m3((1.0 / v) * (1.0 + w)))
}
