use anyhow::Result;
use clap::{Parser, Subcommand};
use query_router::infrastructure::logger;
use query_router::{AppConfig, Launcher};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Intent-routing question service")]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    /// Debug-level logging when RUST_LOG is unset
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default)
    Serve,
    /// Answer one question and print the JSON reply
    Ask {
        /// The question text; unquoted words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let launcher = Launcher::with_config(cli.config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("starting query router");
            launcher.launch().await
        }
        Command::Ask { query } => {
            let router = launcher.build_router()?;
            let response = router.ask(&query.join(" ")).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}
