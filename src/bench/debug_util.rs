use simplelog::*;

// logger can only be set once per process, later calls are ignored
pub fn init_test_log_as_info() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}
pub fn init_test_log_as_debug() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}
