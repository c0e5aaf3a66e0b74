use crate::demo::{run_demo, run_launch_plan, run_recommend, LaunchArgs, RecommendArgs};
use crate::server;
use blueprint_ai::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Blueprint Architect",
    about = "Serve and demonstrate guided system architecture recommendations from the command line",
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
    /// Build a recommendation from questionnaire answers and print it
    Recommend(RecommendArgs),
    /// Build a cluster launch plan for a GitHub repository
    Launch(LaunchArgs),
    /// Render a sample recommendation end to end
    Demo,
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
        Command::Recommend(args) => run_recommend(args),
        Command::Launch(args) => run_launch_plan(args).await,
        Command::Demo => run_demo(),
    }
}
