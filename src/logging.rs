//! # 日志初始化
//!
//! 日志写到 stderr，不会与成功提示混在一起。`RUST_LOG` 可覆盖命令行给出的级别。

use log::LevelFilter;

/// 由 `-v` 的次数与 `-q` 推导日志级别。
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logging(verbose: u8, quiet: bool) {
    // 重复初始化 (如测试中) 时保留已有的 logger。
    env_logger::Builder::new()
        .filter_level(level_for(verbose, quiet))
        .parse_default_env()
        .format_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(3, true), LevelFilter::Error);
        assert_eq!(level_for(0, false), LevelFilter::Warn);
        assert_eq!(level_for(2, false), LevelFilter::Debug);
    }
}
