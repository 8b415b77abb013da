use serde::{Deserialize, Serialize};

/// 절대 온도 단위. 내부 기준은 켈빈이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

/// 온도차 단위. 기준점 없이 배율만 가진다(Δ°C = ΔK, Δ°F = ΔR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

const CELSIUS_OFFSET_K: f64 = 273.15;

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "°R",
        }
    }

    /// 같은 눈금 간격을 가지는 온도차 단위.
    pub fn difference(self) -> TemperatureDiffUnit {
        match self {
            TemperatureUnit::Kelvin => TemperatureDiffUnit::Kelvin,
            TemperatureUnit::Celsius => TemperatureDiffUnit::Celsius,
            TemperatureUnit::Fahrenheit => TemperatureDiffUnit::Fahrenheit,
            TemperatureUnit::Rankine => TemperatureDiffUnit::Rankine,
        }
    }
}

impl TemperatureDiffUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureDiffUnit::Kelvin => "ΔK",
            TemperatureDiffUnit::Celsius => "Δ°C",
            TemperatureDiffUnit::Fahrenheit => "Δ°F",
            TemperatureDiffUnit::Rankine => "ΔR",
        }
    }
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + CELSIUS_OFFSET_K,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - CELSIUS_OFFSET_K,
        TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

/// 온도차를 켈빈 간격으로 환산한다.
pub fn diff_to_kelvin(value: f64, unit: TemperatureDiffUnit) -> f64 {
    match unit {
        TemperatureDiffUnit::Kelvin | TemperatureDiffUnit::Celsius => value,
        TemperatureDiffUnit::Fahrenheit | TemperatureDiffUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 간격을 원하는 온도차 단위로 환산한다.
pub fn diff_from_kelvin(value_k: f64, unit: TemperatureDiffUnit) -> f64 {
    match unit {
        TemperatureDiffUnit::Kelvin | TemperatureDiffUnit::Celsius => value_k,
        TemperatureDiffUnit::Fahrenheit | TemperatureDiffUnit::Rankine => value_k * 9.0 / 5.0,
    }
}
