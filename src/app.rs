use tracing::info;

use crate::air::{self, MoistAirState, PsychroError, WetBulbOptions};
use crate::cli::{AmbientArgs, Cli, Command, SolverArgs, StateArgs, WetBulbArgs};
use crate::config::{self, Config, ConfigError, DisplayUnits};
use crate::conversion::{self, ConversionError};
use crate::quantity::{Quantity, QuantityError, QuantityKind};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 해석/변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 습공기 계산 오류
    #[error("습공기 계산 오류: {0}")]
    Psychro(#[from] PsychroError),
    /// 결과 출력 단위 변환 오류
    #[error(transparent)]
    Quantity(#[from] QuantityError),
    /// state 명령의 두 번째 상태량이 없거나 둘 이상
    #[error("--rh, --wet-bulb, --ratio 중 정확히 하나를 지정해야 합니다")]
    StateInput,
}

/// `state` 명령에서 건구온도와 함께 주는 상태량.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StateInput {
    RelativeHumidity(f64),
    WetBulb(f64),
    HumidityRatio(f64),
}

impl StateInput {
    fn from_args(args: &StateArgs) -> Result<Self, AppError> {
        match (args.rh, args.wet_bulb, args.ratio) {
            (Some(rh), None, None) => Ok(StateInput::RelativeHumidity(rh)),
            (None, Some(t_wb), None) => Ok(StateInput::WetBulb(t_wb)),
            (None, None, Some(w)) => Ok(StateInput::HumidityRatio(w)),
            _ => Err(AppError::StateInput),
        }
    }
}

/// 명령 하나를 실행하고 결과를 표준출력에 쓴다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    info!(solver = ?cfg.solver, ambient = ?cfg.ambient, "configuration ready");
    let units = &cfg.display_units;

    match cli.command {
        Command::State(args) => {
            let state = compute_state(&cfg, &args)?;
            print_state(&state, units)?;
        }
        Command::WetBulb(args) => match compute_wet_bulb(&cfg, &args)? {
            Some(t_wb) => {
                let t_wb = t_wb.to(units.temperature)?;
                println!("습구온도: {t_wb:.3}");
            }
            None => {
                let max_iter = solver_options(&cfg, &args.solver).max_iter;
                println!("습구온도: {max_iter}회 안에 수렴하지 않음");
            }
        },
        Command::DewPoint(args) => {
            let w = conversion::parse_quantity(QuantityKind::Ratio, args.ratio, &args.ratio_unit)?;
            let p = resolve_pressure(&cfg, &args.ambient)?;
            let t_dp = air::dew_point(p, w)?.to(units.temperature)?;
            println!("노점온도: {t_dp:.3}");
        }
        Command::Saturation(args) => {
            let t = conversion::parse_quantity(
                QuantityKind::Temperature,
                args.temperature,
                &args.t_unit,
            )?;
            let p_ws = air::saturation_pressure(t)?.to(units.pressure)?;
            println!("포화 수증기압: {p_ws:.5}");
        }
        Command::Atmosphere(args) => {
            let z = conversion::parse_quantity(QuantityKind::Length, args.elevation, &args.z_unit)?;
            let p = air::pressure_at_elevation(z)?.to(units.pressure)?;
            let t = air::standard_temperature(z)?.to(units.temperature)?;
            let z = z.to(units.length)?;
            println!("해발고도:      {z:.1}");
            println!("표준대기 압력: {p:.3}");
            println!("표준대기 온도: {t:.2}");
        }
        Command::Convert(args) => {
            let result = conversion::convert(args.kind.into(), args.value, &args.from, &args.to)?;
            println!("변환 결과: {result}");
        }
    }
    Ok(())
}

fn compute_state(cfg: &Config, args: &StateArgs) -> Result<MoistAirState, AppError> {
    let input = StateInput::from_args(args)?;
    let t_db = parse_temperature(args.dry_bulb, &args.t_unit)?;
    let p = resolve_pressure(cfg, &args.ambient)?;
    let options = solver_options(cfg, &args.solver);

    let state = match input {
        StateInput::RelativeHumidity(rh) => {
            MoistAirState::from_dry_bulb_rh(t_db, Quantity::percent(rh), p, &options)?
        }
        StateInput::WetBulb(t_wb) => {
            let t_wb = parse_temperature(t_wb, &args.t_unit)?;
            MoistAirState::from_dry_bulb_wet_bulb(t_db, t_wb, p)?
        }
        StateInput::HumidityRatio(w) => {
            let w = conversion::parse_quantity(QuantityKind::Ratio, w, &args.ratio_unit)?;
            MoistAirState::from_dry_bulb_humidity_ratio(t_db, w, p, &options)?
        }
    };
    Ok(state)
}

fn compute_wet_bulb(cfg: &Config, args: &WetBulbArgs) -> Result<Option<Quantity>, AppError> {
    let t_db = parse_temperature(args.dry_bulb, &args.t_unit)?;
    let p = resolve_pressure(cfg, &args.ambient)?;
    let options = solver_options(cfg, &args.solver);
    Ok(air::wet_bulb(t_db, Quantity::percent(args.rh), p, &options)?)
}

fn parse_temperature(value: f64, unit: &str) -> Result<Quantity, ConversionError> {
    conversion::parse_quantity(QuantityKind::Temperature, value, unit)
}

/// 명령행 인자 > 설정 파일 순으로 전압을 정한다.
fn resolve_pressure(cfg: &Config, args: &AmbientArgs) -> Result<Quantity, AppError> {
    if let Some(p) = args.pressure {
        return Ok(conversion::parse_quantity(QuantityKind::Pressure, p, &args.p_unit)?);
    }
    if let Some(z) = args.elevation {
        let z = conversion::parse_quantity(QuantityKind::Length, z, &args.z_unit)?;
        return Ok(air::pressure_at_elevation(z)?);
    }
    Ok(cfg.ambient_pressure()?)
}

// checked는 어느 한쪽만 켜도 켜진다
fn solver_options(cfg: &Config, args: &SolverArgs) -> WetBulbOptions {
    WetBulbOptions {
        max_iter: args.max_iter.unwrap_or(cfg.solver.max_iter),
        tolerance: args.tolerance.unwrap_or(cfg.solver.tolerance),
        checked: args.checked || cfg.solver.checked,
    }
}

fn print_state(state: &MoistAirState, units: &DisplayUnits) -> Result<(), QuantityError> {
    let t_db = state.dry_bulb.to(units.temperature)?;
    let t_dp = state.dew_point.to(units.temperature)?;
    let rh = state.relative_humidity;
    let w = state.humidity_ratio.to(units.humidity_ratio)?;
    let p = state.pressure.to(units.pressure)?;
    let p_ws = state.saturation_pressure.to(units.pressure)?;
    let p_w = state.partial_pressure.to(units.pressure)?;
    let rho_da = state.dry_air_density.to(units.density)?;
    let rho = state.moist_air_density.to(units.density)?;
    let h = state.enthalpy.to(units.specific_enthalpy)?;

    println!("건구온도:       {t_db:.2}");
    match state.wet_bulb {
        Some(t_wb) => {
            let t_wb = t_wb.to(units.temperature)?;
            println!("습구온도:       {t_wb:.2}");
        }
        None => println!("습구온도:       수렴하지 않음"),
    }
    println!("노점온도:       {t_dp:.2}");
    println!("상대습도:       {rh:.2}");
    println!("습도비:         {w:.6}");
    println!("전압:           {p:.3}");
    println!("포화 수증기압:  {p_ws:.4}");
    println!("수증기 분압:    {p_w:.4}");
    println!("건공기 밀도:    {rho_da:.4}");
    println!("습공기 밀도:    {rho:.4}");
    println!("비엔탈피:       {h:.2}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{PressureUnit, RatioUnit};
    use approx::assert_abs_diff_eq;
    use clap::Parser;

    fn parse(args: &[&str]) -> Command {
        let argv = std::iter::once("psychrometrics_cli").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().command
    }

    fn state_args(args: &[&str]) -> StateArgs {
        let mut argv = vec!["state"];
        argv.extend_from_slice(args);
        match parse(&argv) {
            Command::State(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    // 20°C, 50% 에 옵션만 덧붙인다
    fn mild_state_args(extra: &[&str]) -> StateArgs {
        let mut argv = vec!["-t", "20", "--rh", "50"];
        argv.extend_from_slice(extra);
        state_args(&argv)
    }

    // 26.7°C, 50% 에 옵션만 덧붙인다
    fn summer_wet_bulb_args(extra: &[&str]) -> WetBulbArgs {
        let mut argv = vec!["wet-bulb", "-t", "26.7", "--rh", "50"];
        argv.extend_from_slice(extra);
        match parse(&argv) {
            Command::WetBulb(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    fn high_site_config() -> Config {
        let mut cfg = Config::default();
        cfg.ambient.pressure_kpa = 90.0;
        cfg.ambient.elevation_m = Some(1600.0);
        cfg
    }

    fn kpa(p: Quantity) -> f64 {
        p.value_in(PressureUnit::KiloPascal).unwrap()
    }

    #[test]
    fn pressure_argument_wins_over_everything() {
        let args = mild_state_args(&["-p", "14.7", "--p-unit", "psi"]);
        let p = resolve_pressure(&high_site_config(), &args.ambient).unwrap();
        assert_abs_diff_eq!(kpa(p), 101.353, epsilon = 1e-3);
    }

    #[test]
    fn elevation_argument_wins_over_config() {
        let args = mild_state_args(&["-e", "0"]);
        let p = resolve_pressure(&high_site_config(), &args.ambient).unwrap();
        assert_abs_diff_eq!(kpa(p), 101.325, epsilon = 1e-9);
    }

    #[test]
    fn config_elevation_wins_over_config_pressure() {
        let args = mild_state_args(&[]);
        let p = resolve_pressure(&high_site_config(), &args.ambient).unwrap();
        assert_abs_diff_eq!(kpa(p), 83.5235, epsilon = 1e-3);

        let mut cfg = high_site_config();
        cfg.ambient.elevation_m = None;
        let p = resolve_pressure(&cfg, &args.ambient).unwrap();
        assert_abs_diff_eq!(kpa(p), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn solver_arguments_override_config() {
        let mut cfg = Config::default();
        cfg.solver = WetBulbOptions {
            max_iter: 7,
            tolerance: 1e-6,
            checked: true,
        };

        let args = mild_state_args(&[]);
        assert_eq!(solver_options(&cfg, &args.solver), cfg.solver);

        let args = mild_state_args(&["--max-iter", "2", "--tolerance", "1e-3"]);
        let options = solver_options(&cfg, &args.solver);
        assert_eq!(options.max_iter, 2);
        assert_abs_diff_eq!(options.tolerance, 1e-3);
        assert!(options.checked);
    }

    #[test]
    fn checked_flag_turns_on_without_config() {
        let cfg = Config::default();
        let args = mild_state_args(&[]);
        assert!(!solver_options(&cfg, &args.solver).checked);
        let args = mild_state_args(&["--checked"]);
        assert!(solver_options(&cfg, &args.solver).checked);
    }

    #[test]
    fn state_input_follows_the_given_option() {
        let args = state_args(&["-t", "20", "--rh", "50"]);
        assert_eq!(
            StateInput::from_args(&args).unwrap(),
            StateInput::RelativeHumidity(50.0)
        );
        let args = state_args(&["-t", "20", "-w", "15"]);
        assert_eq!(
            StateInput::from_args(&args).unwrap(),
            StateInput::WetBulb(15.0)
        );
        let args = state_args(&["-t", "20", "--ratio", "0.01"]);
        assert_eq!(
            StateInput::from_args(&args).unwrap(),
            StateInput::HumidityRatio(0.01)
        );

        let mut args = mild_state_args(&[]);
        args.rh = None;
        assert!(matches!(StateInput::from_args(&args), Err(AppError::StateInput)));
    }

    #[test]
    fn state_from_rh_and_from_its_wet_bulb_agree() {
        let cfg = Config::default();
        let args = state_args(&["-t", "26.7", "--rh", "50", "-p", "101.325"]);
        let by_rh = compute_state(&cfg, &args).unwrap();
        let t_wb = by_rh.wet_bulb.unwrap().value();
        assert_abs_diff_eq!(t_wb, 19.2869, epsilon = 2e-3);

        let t_wb = t_wb.to_string();
        let args = state_args(&["-t", "26.7", "-w", &t_wb, "-p", "101.325"]);
        let by_wb = compute_state(&cfg, &args).unwrap();
        assert_abs_diff_eq!(by_wb.relative_humidity.value(), 50.0, epsilon = 0.1);

        let args = state_args(&["-t", "26.7", "--ratio", "10.95", "--ratio-unit", "g/kg"]);
        let by_w = compute_state(&cfg, &args).unwrap();
        let w = by_w.humidity_ratio.value_in(RatioUnit::Fraction).unwrap();
        assert_abs_diff_eq!(w, 0.01095, epsilon = 1e-12);
    }

    #[test]
    fn wet_bulb_command_honours_checked_budget() {
        let cfg = Config::default();
        let args = summer_wet_bulb_args(&["--max-iter", "1", "--checked"]);
        assert!(matches!(
            compute_wet_bulb(&cfg, &args),
            Err(AppError::Psychro(PsychroError::NotConverged { .. }))
        ));

        let args = summer_wet_bulb_args(&["--max-iter", "1"]);
        assert_eq!(compute_wet_bulb(&cfg, &args).unwrap(), None);

        let args = summer_wet_bulb_args(&[]);
        assert!(compute_wet_bulb(&cfg, &args).unwrap().is_some());
    }
}
