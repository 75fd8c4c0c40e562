use tracing_subscriber::EnvFilter;

/// 전역 로거를 한 번 초기화한다. RUST_LOG가 있으면 그 값을, 없으면 설정의 수준을 쓴다.
/// 이미 초기화되어 있으면 조용히 넘어간다.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
