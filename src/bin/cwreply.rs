use std::process;

use chatwiz::commands::suggest::{self, SuggestArgs};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "cwreply",
    about = "Generate reply suggestions for an incoming message",
    disable_version_flag = true
)]
struct Cli {
    #[command(flatten)]
    suggest: SuggestArgs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = suggest::run(cli.suggest).await {
        eprintln!("{err}");
        process::exit(1);
    }
}
