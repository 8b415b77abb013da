use crate::quantity::{Quantity, QuantityError, QuantityKind, Unit};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// 해당 물리량 계열에서 알 수 없는 단위 문자열
    #[error("알 수 없는 {kind} 단위: {unit}")]
    UnknownUnit { kind: QuantityKind, unit: String },
    #[error(transparent)]
    Quantity(#[from] QuantityError),
}

/// 문자열로 전달된 단위명을 해당 계열의 단위로 해석한다.
///
/// 단위 문자열 예시는 `C`, `K`, `kPa`, `psi`, `%`, `g/kg`, `ft` 등을 사용할 수 있다.
/// 대소문자는 구분하지 않는다.
pub fn parse_unit(kind: QuantityKind, s: &str) -> Result<Unit, ConversionError> {
    let key = s.trim().to_lowercase();
    let unit = match kind {
        QuantityKind::Temperature => parse_temperature_unit(&key).map(Unit::from),
        QuantityKind::TemperatureDifference => parse_temperature_diff_unit(&key).map(Unit::from),
        QuantityKind::Pressure => parse_pressure_unit(&key).map(Unit::from),
        QuantityKind::Ratio => parse_ratio_unit(&key).map(Unit::from),
        QuantityKind::Density => parse_density_unit(&key).map(Unit::from),
        QuantityKind::SpecificEnthalpy => parse_specific_enthalpy_unit(&key).map(Unit::from),
        QuantityKind::Length => parse_length_unit(&key).map(Unit::from),
    };
    unit.ok_or_else(|| ConversionError::UnknownUnit {
        kind,
        unit: s.to_string(),
    })
}

/// 값과 단위 문자열로 물리량을 만든다.
pub fn parse_quantity(
    kind: QuantityKind,
    value: f64,
    unit_str: &str,
) -> Result<Quantity, ConversionError> {
    Ok(Quantity::new(value, parse_unit(kind, unit_str)?))
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<Quantity, ConversionError> {
    let to = parse_unit(kind, to_unit_str)?;
    Ok(parse_quantity(kind, value, from_unit_str)?.to(to)?)
}

fn parse_temperature_unit(s: &str) -> Option<TemperatureUnit> {
    match s {
        "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" | "degc" => Some(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" | "degf" => Some(TemperatureUnit::Fahrenheit),
        "r" | "rankine" | "°r" => Some(TemperatureUnit::Rankine),
        _ => None,
    }
}

fn parse_temperature_diff_unit(s: &str) -> Option<TemperatureDiffUnit> {
    // 온도차는 `Δ` 접두어를 붙여도 되고 생략해도 된다
    match s.trim_start_matches('δ').trim_start_matches("delta") {
        "k" | "kelvin" => Some(TemperatureDiffUnit::Kelvin),
        "c" | "celsius" | "°c" | "degc" => Some(TemperatureDiffUnit::Celsius),
        "f" | "fahrenheit" | "°f" | "degf" => Some(TemperatureDiffUnit::Fahrenheit),
        "r" | "rankine" | "°r" => Some(TemperatureDiffUnit::Rankine),
        _ => None,
    }
}

fn parse_pressure_unit(s: &str) -> Option<PressureUnit> {
    match s {
        "pa" | "pascal" => Some(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Some(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Some(PressureUnit::MegaPascal),
        "bar" | "bara" => Some(PressureUnit::Bar),
        "mbar" | "millibar" | "hpa" => Some(PressureUnit::MilliBar),
        "psi" | "psia" => Some(PressureUnit::Psi),
        "atm" => Some(PressureUnit::Atm),
        "mmhg" | "torr" => Some(PressureUnit::MmHg),
        "inhg" => Some(PressureUnit::InHg),
        _ => None,
    }
}

fn parse_ratio_unit(s: &str) -> Option<RatioUnit> {
    match s {
        "kg/kg" | "fraction" | "1" => Some(RatioUnit::Fraction),
        "%" | "percent" | "%rh" => Some(RatioUnit::Percent),
        "g/kg" => Some(RatioUnit::GramPerKilogram),
        _ => None,
    }
}

fn parse_density_unit(s: &str) -> Option<DensityUnit> {
    match s {
        "kg/m3" | "kg/m^3" | "kg/m³" => Some(DensityUnit::KgPerCubicMeter),
        "g/l" => Some(DensityUnit::GramPerLiter),
        "lb/ft3" | "lb/ft^3" | "lbm/ft3" => Some(DensityUnit::PoundPerCubicFoot),
        _ => None,
    }
}

fn parse_specific_enthalpy_unit(s: &str) -> Option<SpecificEnthalpyUnit> {
    match s {
        "kj/kg" => Some(SpecificEnthalpyUnit::KjPerKg),
        "kcal/kg" => Some(SpecificEnthalpyUnit::KcalPerKg),
        "btu/lb" | "btu/lbm" => Some(SpecificEnthalpyUnit::BtuPerPound),
        _ => None,
    }
}

fn parse_length_unit(s: &str) -> Option<LengthUnit> {
    match s {
        "m" | "meter" | "metre" => Some(LengthUnit::Meter),
        "mm" => Some(LengthUnit::Millimeter),
        "cm" => Some(LengthUnit::Centimeter),
        "km" => Some(LengthUnit::Kilometer),
        "in" | "inch" => Some(LengthUnit::Inch),
        "ft" | "foot" | "feet" => Some(LengthUnit::Foot),
        "yd" | "yard" => Some(LengthUnit::Yard),
        _ => None,
    }
}
