use tracing_subscriber::EnvFilter;

/// 로그를 받을 크레이트 타깃.
const CRATE_TARGETS: &[&str] = &["psychrometrics", "psychrometrics_cli"];

/// CLI `-v` 횟수에 따라 tracing 구독자를 설치한다.
///
/// - 0 (없음) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` 환경변수가 있으면 그것을 우선한다. 로그는 stderr로 나가므로 계산 결과
/// 출력(stdout)과 섞이지 않는다.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // 테스트 등에서 이미 설치된 경우는 무시한다
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
