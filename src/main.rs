use clap::Parser;
use opsguard::structs::cli::Cli;
use opsguard::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();
    let code = runner.run_command(cli.command).await;

    std::process::exit(code)
}
