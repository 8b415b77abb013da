use clap::Parser;
use psychrometrics::{app, cli::Cli, logging};

/// 프로그램의 엔트리 포인트. 로그를 설정한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = app::run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
