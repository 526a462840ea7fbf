use std::io;
use std::process;

use chatwiz::commands::config::{self, ConfigArgs};
use chatwiz::commands::suggest::{self, SuggestArgs};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, shells};

const ROOT_HELP_EXAMPLES: &str = "Examples:\n  chatwiz suggest --scene friend \"在吗\"\n  pbpaste | chatwiz suggest --scene colleague\n  chatwiz config check\n  chatwiz completion bash > ~/.local/share/bash-completion/completions/chatwiz";

const SUGGEST_HELP_EXAMPLES: &str = "Examples:\n  chatwiz suggest --scene crush \"周末有安排吗\"\n  echo \"在吗\" | chatwiz suggest --scene friend --json\n  chatwiz suggest --scene stranger --dry-run --json \"你也喜欢爬山？\"";

#[derive(Debug, Parser)]
#[command(
    name = "chatwiz",
    about = "Three styled reply suggestions for a pasted chat message",
    after_help = ROOT_HELP_EXAMPLES
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(
        about = "Generate reply suggestions for an incoming message",
        after_help = SUGGEST_HELP_EXAMPLES
    )]
    Suggest(SuggestArgs),
    #[command(about = "Manage the local secrets file")]
    Config(ConfigArgs),
    #[command(about = "Generate shell completion script")]
    Completion {
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

fn print_completion(shell: CompletionShell) {
    let mut cmd = Cli::command();
    match shell {
        CompletionShell::Bash => generate(shells::Bash, &mut cmd, "chatwiz", &mut io::stdout()),
        CompletionShell::Zsh => generate(shells::Zsh, &mut cmd, "chatwiz", &mut io::stdout()),
        CompletionShell::Fish => generate(shells::Fish, &mut cmd, "chatwiz", &mut io::stdout()),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Suggest(args) => suggest::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Completion { shell } => {
            print_completion(shell);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
