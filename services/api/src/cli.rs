use crate::demo::{run_demo, run_soil_assess, run_soil_import, DemoArgs, SoilAssessArgs, SoilImportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use kisan_mitra::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Kisan Mitra Soil Advisor",
    about = "Score soil samples and serve fertilizer recommendations from the command line or HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess soil samples entered by hand or imported from a lab report
    Soil {
        #[command(subcommand)]
        command: SoilCommand,
    },
    /// Walk through the mock upload and an all-zero sample end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum SoilCommand {
    /// Assess a single sample from command-line readings
    Assess(SoilAssessArgs),
    /// Assess every row of a soil-lab CSV export
    Import(SoilImportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Soil {
            command: SoilCommand::Assess(args),
        } => run_soil_assess(args),
        Command::Soil {
            command: SoilCommand::Import(args),
        } => run_soil_import(args),
        Command::Demo(args) => run_demo(args),
    }
}
