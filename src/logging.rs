use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// 상세도(-v 횟수)에 따라 stderr 로그 레벨을 정한다.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// 전역 tracing 구독자를 설치한다. 이미 설치되어 있으면 오류 메시지를 돌려준다.
pub fn setup_logging(verbosity: u8, quiet: bool) -> Result<(), String> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_for(verbosity, quiet))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| e.to_string())
}
