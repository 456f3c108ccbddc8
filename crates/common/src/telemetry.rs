use std::sync::Once;

static INIT: Once = Once::new();

/// 初始化日志（env_logger），默认级别 warn，可通过 RUST_LOG 覆盖；重复调用无副作用
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .format_target(false)
            .try_init();
    });
}
