use clap::Parser;
use sentinel::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use sentinel::adapter::inbound::cli::output::{self, OutputConfig};
use sentinel::adapter::inbound::cli::{config, run, status};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Status(args) => status::execute(args).await,
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
