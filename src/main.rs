use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use lsb_frame::{
    cli::{Cli, Commands},
    exit,
    handler::{handle_capacity, handle_hide, handle_recover},
    logging::init_logging,
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`hide`、`recover` 或 `capacity`）
/// 将执行分派到相应的处理函数；失败时按错误类型返回不同的退出码
fn main() -> ExitCode {
    // 解析命令行参数
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // 根据子命令调用相应的处理函数
    let result = match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Recover(args) => handle_recover(args),
        Commands::Capacity(args) => handle_capacity(args),
    };

    match result {
        Ok(()) => ExitCode::from(exit::SUCCESS),
        Err(err) => {
            eprintln!("{} {:?}", "Error:".red().bold(), err);
            ExitCode::from(exit::code_for(&err))
        }
    }
}
