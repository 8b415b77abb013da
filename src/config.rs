use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::air::{self, PsychroError, WetBulbOptions};
use crate::quantity::Quantity;
use crate::units::*;

/// 기본 설정 파일 이름. 현재 작업 디렉터리 기준이다.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 입력에서 생략된 대기 조건의 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientDefaults {
    /// 전압 [kPa]
    pub pressure_kpa: f64,
    /// 해발고도 [m]. 지정하면 `pressure_kpa` 대신 표준대기 압력을 쓴다.
    pub elevation_m: Option<f64>,
}

impl Default for AmbientDefaults {
    fn default() -> Self {
        Self {
            pressure_kpa: air::DEFAULT_PRESSURE_KPA,
            elevation_m: None,
        }
    }
}

/// 결과 출력에 쓰는 물리량별 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
    pub humidity_ratio: RatioUnit,
    pub density: DensityUnit,
    pub specific_enthalpy: SpecificEnthalpyUnit,
    pub length: LengthUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            pressure: PressureUnit::KiloPascal,
            humidity_ratio: RatioUnit::Fraction,
            density: DensityUnit::KgPerCubicMeter,
            specific_enthalpy: SpecificEnthalpyUnit::KjPerKg,
            length: LengthUnit::Meter,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ambient: AmbientDefaults,
    pub solver: WetBulbOptions,
    pub display_units: DisplayUnits,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(DEFAULT_CONFIG_FILE))
}

/// 지정 경로의 설정을 읽는다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        return load_from(path);
    }
    tracing::info!(path = %path.display(), "config not found, writing defaults");
    let cfg = Config::default();
    cfg.save_to(path)?;
    Ok(cfg)
}

/// 지정 경로의 설정을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

impl Config {
    /// 설정을 지정 경로에 TOML로 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 설정상의 전압. 해발고도가 있으면 표준대기 압력을 우선한다.
    pub fn ambient_pressure(&self) -> Result<Quantity, PsychroError> {
        match self.ambient.elevation_m {
            Some(z) => air::pressure_at_elevation(Quantity::meters(z)),
            None => Ok(Quantity::kpa(self.ambient.pressure_kpa)),
        }
    }
}
