use serde::{Deserialize, Serialize};

use crate::units::{
    density, length, pressure, ratio, specific_enthalpy, temperature, DensityUnit, LengthUnit,
    PressureUnit, RatioUnit, SpecificEnthalpyUnit, TemperatureDiffUnit, TemperatureUnit,
};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityKind {
    Temperature,
    TemperatureDifference,
    Pressure,
    Ratio,
    Density,
    SpecificEnthalpy,
    Length,
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QuantityKind::Temperature => "온도",
            QuantityKind::TemperatureDifference => "온도차",
            QuantityKind::Pressure => "압력",
            QuantityKind::Ratio => "비율",
            QuantityKind::Density => "밀도",
            QuantityKind::SpecificEnthalpy => "비엔탈피",
            QuantityKind::Length => "길이",
        };
        f.write_str(name)
    }
}

/// 물리량에 붙는 단위 태그. 계열마다 `units`의 enum 하나를 감싼다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Temperature(TemperatureUnit),
    TemperatureDifference(TemperatureDiffUnit),
    Pressure(PressureUnit),
    Ratio(RatioUnit),
    Density(DensityUnit),
    SpecificEnthalpy(SpecificEnthalpyUnit),
    Length(LengthUnit),
}

impl Unit {
    pub fn kind(self) -> QuantityKind {
        match self {
            Unit::Temperature(_) => QuantityKind::Temperature,
            Unit::TemperatureDifference(_) => QuantityKind::TemperatureDifference,
            Unit::Pressure(_) => QuantityKind::Pressure,
            Unit::Ratio(_) => QuantityKind::Ratio,
            Unit::Density(_) => QuantityKind::Density,
            Unit::SpecificEnthalpy(_) => QuantityKind::SpecificEnthalpy,
            Unit::Length(_) => QuantityKind::Length,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Temperature(u) => u.symbol(),
            Unit::TemperatureDifference(u) => u.symbol(),
            Unit::Pressure(u) => u.symbol(),
            Unit::Ratio(u) => u.symbol(),
            Unit::Density(u) => u.symbol(),
            Unit::SpecificEnthalpy(u) => u.symbol(),
            Unit::Length(u) => u.symbol(),
        }
    }

    /// 계열 내부 기준 단위(K, ΔK, kPa, 분율, kg/m³, kJ/kg, m)로 환산한다.
    fn to_base(self, value: f64) -> f64 {
        match self {
            Unit::Temperature(u) => temperature::to_kelvin(value, u),
            Unit::TemperatureDifference(u) => temperature::diff_to_kelvin(value, u),
            Unit::Pressure(u) => pressure::to_kpa(value, u),
            Unit::Ratio(u) => ratio::to_fraction(value, u),
            Unit::Density(u) => density::to_kg_per_m3(value, u),
            Unit::SpecificEnthalpy(u) => specific_enthalpy::to_kj_per_kg(value, u),
            Unit::Length(u) => length::to_meter(value, u),
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            Unit::Temperature(u) => temperature::from_kelvin(value, u),
            Unit::TemperatureDifference(u) => temperature::diff_from_kelvin(value, u),
            Unit::Pressure(u) => pressure::from_kpa(value, u),
            Unit::Ratio(u) => ratio::from_fraction(value, u),
            Unit::Density(u) => density::from_kg_per_m3(value, u),
            Unit::SpecificEnthalpy(u) => specific_enthalpy::from_kj_per_kg(value, u),
            Unit::Length(u) => length::from_meter(value, u),
        }
    }
}

impl From<TemperatureUnit> for Unit {
    fn from(value: TemperatureUnit) -> Self {
        Unit::Temperature(value)
    }
}

impl From<TemperatureDiffUnit> for Unit {
    fn from(value: TemperatureDiffUnit) -> Self {
        Unit::TemperatureDifference(value)
    }
}

impl From<PressureUnit> for Unit {
    fn from(value: PressureUnit) -> Self {
        Unit::Pressure(value)
    }
}

impl From<RatioUnit> for Unit {
    fn from(value: RatioUnit) -> Self {
        Unit::Ratio(value)
    }
}

impl From<DensityUnit> for Unit {
    fn from(value: DensityUnit) -> Self {
        Unit::Density(value)
    }
}

impl From<SpecificEnthalpyUnit> for Unit {
    fn from(value: SpecificEnthalpyUnit) -> Self {
        Unit::SpecificEnthalpy(value)
    }
}

impl From<LengthUnit> for Unit {
    fn from(value: LengthUnit) -> Self {
        Unit::Length(value)
    }
}

/// 물리량 변환/연산 시 발생 가능한 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// 요구한 계열로 변환할 수 없는 단위
    #[error("단위 계열 불일치: {expected} 단위가 필요하지만 {found} 단위가 주어짐")]
    IncompatibleUnit {
        expected: QuantityKind,
        found: QuantityKind,
    },
}

/// 단위가 붙은 스칼라 값.
///
/// 계산식은 입력을 기대 단위로 `to`/`value_in` 한 뒤 숫자만 꺼내 쓰고,
/// 결과에 `new`로 단위를 다시 붙인다. 온도와 온도차는 서로 다른 계열이며
/// 온도 ± 온도차 = 온도, 온도 − 온도 = 온도차 방향만 허용한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<Unit>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    pub fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    pub fn kelvin(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Kelvin)
    }

    pub fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    pub fn delta_celsius(value: f64) -> Self {
        Self::new(value, TemperatureDiffUnit::Celsius)
    }

    pub fn kpa(value: f64) -> Self {
        Self::new(value, PressureUnit::KiloPascal)
    }

    pub fn pa(value: f64) -> Self {
        Self::new(value, PressureUnit::Pascal)
    }

    /// kg/kg 분율
    pub fn ratio(value: f64) -> Self {
        Self::new(value, RatioUnit::Fraction)
    }

    pub fn percent(value: f64) -> Self {
        Self::new(value, RatioUnit::Percent)
    }

    pub fn meters(value: f64) -> Self {
        Self::new(value, LengthUnit::Meter)
    }

    pub fn kg_per_m3(value: f64) -> Self {
        Self::new(value, DensityUnit::KgPerCubicMeter)
    }

    pub fn kj_per_kg(value: f64) -> Self {
        Self::new(value, SpecificEnthalpyUnit::KjPerKg)
    }

    /// 단위를 떼어낸 숫자.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn kind(&self) -> QuantityKind {
        self.unit.kind()
    }

    /// 같은 계열의 다른 단위로 변환한다.
    pub fn to(self, unit: impl Into<Unit>) -> Result<Quantity, QuantityError> {
        let unit = unit.into();
        if unit.kind() != self.kind() {
            return Err(QuantityError::IncompatibleUnit {
                expected: unit.kind(),
                found: self.kind(),
            });
        }
        if unit == self.unit {
            return Ok(self);
        }
        let base = self.unit.to_base(self.value);
        Ok(Quantity::new(unit.from_base(base), unit))
    }

    /// 지정 단위로 변환한 뒤 숫자만 돌려준다.
    pub fn value_in(self, unit: impl Into<Unit>) -> Result<f64, QuantityError> {
        Ok(self.to(unit)?.value)
    }

    /// 결과 단위는 좌변을 따른다.
    pub fn plus(self, rhs: Quantity) -> Result<Quantity, QuantityError> {
        let rhs_unit = self.addend_unit(rhs)?;
        let rhs_value = rhs.value_in(rhs_unit)?;
        Ok(Quantity::new(self.value + rhs_value, self.unit))
    }

    /// 온도 − 온도는 좌변 눈금의 온도차가 된다.
    pub fn minus(self, rhs: Quantity) -> Result<Quantity, QuantityError> {
        if let (Unit::Temperature(lhs_unit), Unit::Temperature(_)) = (self.unit, rhs.unit) {
            let rhs_value = rhs.value_in(lhs_unit)?;
            return Ok(Quantity::new(
                self.value - rhs_value,
                lhs_unit.difference(),
            ));
        }
        let rhs_unit = self.addend_unit(rhs)?;
        let rhs_value = rhs.value_in(rhs_unit)?;
        Ok(Quantity::new(self.value - rhs_value, self.unit))
    }

    // 좌변에 더하거나 뺄 수 있는 우변 단위를 정한다.
    fn addend_unit(self, rhs: Quantity) -> Result<Unit, QuantityError> {
        match (self.unit, rhs.kind()) {
            (Unit::Temperature(u), QuantityKind::TemperatureDifference) => {
                Ok(Unit::TemperatureDifference(u.difference()))
            }
            (Unit::Temperature(_), found) => Err(QuantityError::IncompatibleUnit {
                expected: QuantityKind::TemperatureDifference,
                found,
            }),
            (unit, found) if unit.kind() == found => Ok(unit),
            (unit, found) => Err(QuantityError::IncompatibleUnit {
                expected: unit.kind(),
                found,
            }),
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.value, self.unit.symbol()),
            None => write!(f, "{} {}", self.value, self.unit.symbol()),
        }
    }
}
