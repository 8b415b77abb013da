use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

use crate::quantity::QuantityKind;

/// 습공기 상태량 계산기.
#[derive(Debug, Parser)]
#[command(
    name = "psychrometrics_cli",
    version,
    about = "습공기(psychrometric) 상태량 계산기"
)]
pub struct Cli {
    /// 로그 상세도 (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// 설정 파일 경로. 생략하면 ./config.toml 을 쓰고 없으면 새로 만든다.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 건구온도와 상대습도/습구온도/습도비 중 하나로 전체 상태를 계산한다.
    State(StateArgs),
    /// 건구온도와 상대습도로 습구온도를 반복 계산한다.
    WetBulb(WetBulbArgs),
    /// 습도비로 노점온도를 계산한다.
    DewPoint(DewPointArgs),
    /// 온도에서의 수증기 포화압을 계산한다.
    Saturation(SaturationArgs),
    /// 해발고도의 표준대기 압력과 온도를 계산한다.
    Atmosphere(AtmosphereArgs),
    /// 단위를 변환한다.
    Convert(ConvertArgs),
}

/// 전압 입력. 둘 다 생략하면 설정 파일 값을 쓴다.
#[derive(Debug, clap::Args)]
pub struct AmbientArgs {
    /// 전압(절대압)
    #[arg(short, long, conflicts_with = "elevation")]
    pub pressure: Option<f64>,

    /// 전압 단위
    #[arg(long, default_value = "kPa")]
    pub p_unit: String,

    /// 해발고도. 표준대기 압력으로 환산한다.
    #[arg(short, long, allow_negative_numbers = true)]
    pub elevation: Option<f64>,

    /// 해발고도 단위
    #[arg(long, default_value = "m")]
    pub z_unit: String,
}

/// 반복 계산 설정 덮어쓰기.
#[derive(Debug, clap::Args)]
pub struct SolverArgs {
    /// 최대 뉴턴 갱신 횟수
    #[arg(long)]
    pub max_iter: Option<u32>,

    /// 습도비 절대 허용오차 [kg/kg]
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// 수렴하지 않으면 오류로 처리한다
    #[arg(long)]
    pub checked: bool,
}

#[derive(Debug, clap::Args)]
#[command(group(
    ArgGroup::new("second")
        .required(true)
        .args(["rh", "wet_bulb", "ratio"])
))]
pub struct StateArgs {
    /// 건구온도
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub dry_bulb: f64,

    /// 온도 단위(건구/습구 공통)
    #[arg(long, default_value = "C")]
    pub t_unit: String,

    /// 상대습도 [%]
    #[arg(long)]
    pub rh: Option<f64>,

    /// 습구온도
    #[arg(short = 'w', long, allow_negative_numbers = true)]
    pub wet_bulb: Option<f64>,

    /// 습도비
    #[arg(long)]
    pub ratio: Option<f64>,

    /// 습도비 단위
    #[arg(long, default_value = "kg/kg")]
    pub ratio_unit: String,

    #[command(flatten)]
    pub ambient: AmbientArgs,

    #[command(flatten)]
    pub solver: SolverArgs,
}

#[derive(Debug, clap::Args)]
pub struct WetBulbArgs {
    /// 건구온도
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub dry_bulb: f64,

    /// 온도 단위
    #[arg(long, default_value = "C")]
    pub t_unit: String,

    /// 상대습도 [%]
    #[arg(long)]
    pub rh: f64,

    #[command(flatten)]
    pub ambient: AmbientArgs,

    #[command(flatten)]
    pub solver: SolverArgs,
}

#[derive(Debug, clap::Args)]
pub struct DewPointArgs {
    /// 습도비
    #[arg(long)]
    pub ratio: f64,

    /// 습도비 단위
    #[arg(long, default_value = "kg/kg")]
    pub ratio_unit: String,

    #[command(flatten)]
    pub ambient: AmbientArgs,
}

#[derive(Debug, clap::Args)]
pub struct SaturationArgs {
    /// 온도
    #[arg(allow_negative_numbers = true)]
    pub temperature: f64,

    /// 온도 단위
    #[arg(long, default_value = "C")]
    pub t_unit: String,
}

#[derive(Debug, clap::Args)]
pub struct AtmosphereArgs {
    /// 해발고도
    #[arg(allow_negative_numbers = true)]
    pub elevation: f64,

    /// 해발고도 단위
    #[arg(long, default_value = "m")]
    pub z_unit: String,
}

#[derive(Debug, clap::Args)]
pub struct ConvertArgs {
    /// 물리량 종류
    #[arg(value_enum)]
    pub kind: KindArg,

    /// 값
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// 입력 단위 (예: C, kPa, g/kg)
    pub from: String,

    /// 변환 단위 (예: F, psi, kg/kg)
    pub to: String,
}

/// 명령행에서 고르는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Temperature,
    TemperatureDiff,
    Pressure,
    Ratio,
    Density,
    Enthalpy,
    Length,
}

impl From<KindArg> for QuantityKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Temperature => QuantityKind::Temperature,
            KindArg::TemperatureDiff => QuantityKind::TemperatureDifference,
            KindArg::Pressure => QuantityKind::Pressure,
            KindArg::Ratio => QuantityKind::Ratio,
            KindArg::Density => QuantityKind::Density,
            KindArg::Enthalpy => QuantityKind::SpecificEnthalpy,
            KindArg::Length => QuantityKind::Length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn state_requires_a_second_property() {
        assert!(Cli::try_parse_from(["psychrometrics_cli", "state", "-t", "25"]).is_err());
        let cli =
            Cli::try_parse_from(["psychrometrics_cli", "state", "-t", "-5", "--rh", "60"]).unwrap();
        match cli.command {
            Command::State(args) => {
                assert_eq!(args.dry_bulb, -5.0);
                assert_eq!(args.rh, Some(60.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn pressure_and_elevation_conflict() {
        let res = Cli::try_parse_from([
            "psychrometrics_cli",
            "wet-bulb",
            "-t",
            "25",
            "--rh",
            "50",
            "-p",
            "101",
            "-e",
            "300",
        ]);
        assert!(res.is_err());
    }
}
