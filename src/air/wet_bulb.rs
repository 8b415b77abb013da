use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::humidity_ratio::{humidity_ratio_from_rh, humidity_ratio_from_wet_bulb};
use super::PsychroError;
use crate::quantity::Quantity;
use crate::units::{RatioUnit, TemperatureUnit};

pub const DEFAULT_MAX_ITER: u32 = 5;
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// 수치 미분에 쓰는 습구온도 간격 [Δ°C].
const DERIVATIVE_STEP: f64 = 0.001;

/// 습구온도 뉴턴-랩슨 반복 설정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WetBulbOptions {
    /// 허용하는 최대 갱신 횟수. 0이면 초기값(건구온도)만 검사한다.
    pub max_iter: u32,
    /// 목표 습도비와 계산 습도비 차이의 절대 허용오차 [kg/kg].
    /// 상대오차가 아니다.
    pub tolerance: f64,
    /// true면 수렴 실패를 `PsychroError::NotConverged`로 돌려준다.
    pub checked: bool,
}

impl Default for WetBulbOptions {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            tolerance: DEFAULT_TOLERANCE,
            checked: false,
        }
    }
}

/// 반복 결과와 진단 정보.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbSolution {
    /// 수렴한 습구온도 [°C]. 반복 한도를 넘기면 `None`.
    pub temperature: Option<Quantity>,
    /// 수행한 뉴턴 갱신 횟수
    pub iterations: u32,
    /// 마지막으로 평가한 `W목표 − W` [kg/kg]
    pub residual: f64,
}

impl WetBulbSolution {
    pub fn converged(&self) -> bool {
        self.temperature.is_some()
    }
}

/// 건구온도와 상대습도에서 습구온도를 뉴턴-랩슨으로 푼다.
///
/// 상대습도로 얻은 목표 습도비와 `humidity_ratio_from_wet_bulb`가 같아지는 습구온도를
/// 건구온도부터 출발해 찾는다. 기울기는 `tWB − 0.001 Δ°C`에서의 후방 차분으로 추정한다.
/// 갱신 횟수가 `max_iter`를 넘으면 `temperature`가 `None`인 결과를 돌려준다.
pub fn solve_wet_bulb(
    t_db: Quantity,
    rh: Quantity,
    p: Quantity,
    options: &WetBulbOptions,
) -> Result<WetBulbSolution, PsychroError> {
    let w_target = humidity_ratio_from_rh(t_db, rh, p)?.value_in(RatioUnit::Fraction)?;
    let step = Quantity::delta_celsius(DERIVATIVE_STEP);

    let mut t_wb = t_db.to(TemperatureUnit::Celsius)?;
    let mut iterations: u32 = 0;
    loop {
        let w = humidity_ratio_from_wet_bulb(t_db, t_wb, p)?.value_in(RatioUnit::Fraction)?;
        let residual = w_target - w;
        debug!(
            iteration = iterations,
            t_wb = t_wb.value(),
            residual,
            "wet-bulb iteration"
        );

        if residual.abs() <= options.tolerance {
            return Ok(WetBulbSolution {
                temperature: Some(t_wb),
                iterations,
                residual,
            });
        }
        if iterations + 1 > options.max_iter {
            return Ok(WetBulbSolution {
                temperature: None,
                iterations,
                residual,
            });
        }

        let w_below = humidity_ratio_from_wet_bulb(t_db, t_wb.minus(step)?, p)?
            .value_in(RatioUnit::Fraction)?;
        let slope = (w - w_below) / DERIVATIVE_STEP;
        t_wb = t_wb.plus(Quantity::delta_celsius(residual / slope))?;
        iterations += 1;
    }
}

/// 건구온도와 상대습도에서 습구온도를 구한다 [°C].
///
/// 수렴하지 못하면 `checked`가 false일 때 `Ok(None)`, true일 때
/// `PsychroError::NotConverged`를 돌려준다.
pub fn wet_bulb(
    t_db: Quantity,
    rh: Quantity,
    p: Quantity,
    options: &WetBulbOptions,
) -> Result<Option<Quantity>, PsychroError> {
    let solution = solve_wet_bulb(t_db, rh, p, options)?;
    if solution.converged() {
        return Ok(solution.temperature);
    }

    if options.checked {
        return Err(PsychroError::NotConverged {
            iterations: solution.iterations,
            residual: solution.residual,
        });
    }
    warn!(
        iterations = solution.iterations,
        residual = solution.residual,
        tolerance = options.tolerance,
        "wet-bulb solver did not converge"
    );
    Ok(None)
}
