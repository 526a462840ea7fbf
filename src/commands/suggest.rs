use std::io::{self, Read};

use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;
use serde_json::json;

use crate::config;
use crate::llm::{self, ChatMessage};
use crate::prompt;
use crate::scene::Scene;
use crate::suggestion::{parse_suggestions, SuggestionTriple};

#[derive(Debug, Args, Clone)]
pub struct SuggestArgs {
    /// The pasted incoming message; read from stdin when omitted.
    message: Option<String>,

    /// Who the conversation partner is.
    #[arg(long, value_enum, default_value = "crush")]
    scene: Scene,

    /// Print the assembled request as JSON without calling the API.
    #[arg(long)]
    dry_run: bool,

    /// Output mode for the suggestions.
    #[arg(long, value_enum)]
    output: Option<OutputMode>,

    /// Shorthand for --output json.
    #[arg(long)]
    json: bool,

    /// Print request diagnostics on stderr.
    #[arg(long)]
    verbose: bool,

    /// Suppress diagnostics and progress notices; fatal errors stay visible.
    #[arg(long)]
    quiet: bool,

    /// Print version and build metadata.
    #[arg(long)]
    version: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

pub async fn run(args: SuggestArgs) -> Result<(), String> {
    if args.version {
        println!(
            "chatwiz {} (commit: {}, built: {})",
            env!("CARGO_PKG_VERSION"),
            env!("CW_GIT_SHA"),
            env!("CW_BUILD_TS"),
        );
        return Ok(());
    }

    let output = if args.json {
        OutputMode::Json
    } else {
        args.output.unwrap_or(OutputMode::Text)
    };

    let message = resolve_message(args.message.as_deref())?;
    let scene = args.scene.label();
    let (system_prompt, user_prompt) = prompt::build_prompts(&message, scene);
    let messages = [
        ChatMessage::system(system_prompt),
        ChatMessage::user(user_prompt),
    ];

    if args.dry_run {
        if args.verbose && !args.quiet {
            eprintln!(
                "chatwiz: dry_run=true scene={scene} api_key_present={}",
                config::load_credentials().is_ok(),
            );
        }
        let body = json!({
            "dry_run": true,
            "scene": scene,
            "model": config::configured_model(),
            "messages": messages,
            "request": { "temperature": llm::TEMPERATURE },
            "output": output.as_str(),
        });
        println!("{body}");
        return Ok(());
    }

    let credentials = config::load_credentials()?;
    if args.verbose && !args.quiet {
        eprintln!(
            "chatwiz: scene={scene} model={} base_url={} api_key_present=true",
            credentials.model, credentials.base_url,
        );
    }
    if !args.quiet {
        eprintln!("AI 正在思考中，请稍候...");
    }

    let client = reqwest::Client::new();
    let raw = llm::complete(
        &client,
        &credentials.base_url,
        &credentials.api_key,
        &credentials.model,
        &messages,
    )
    .await
    .map_err(|err| format!("生成失败：{err}"))?;

    let triple = parse_suggestions(&raw);
    match output {
        OutputMode::Json => println!("{}", triple.to_json()),
        OutputMode::Text => print!("{}", render_blocks(&triple)),
    }
    Ok(())
}

fn resolve_message(arg: Option<&str>) -> Result<String, String> {
    let raw = match arg {
        Some(text) => text.to_string(),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("Failed to read message from stdin: {err}"))?;
            buffer
        }
    };

    let message = raw.trim().to_string();
    if message.is_empty() {
        return Err(
            "Message is empty. Paste the incoming message as an argument or via stdin.".to_string(),
        );
    }
    Ok(message)
}

/// Three labeled blocks, each followed by a raw echo of the suggestion so
/// it can be copied without the label or color codes.
fn render_blocks(triple: &SuggestionTriple) -> String {
    format!(
        "{}{}\n{}\n\n{}{}\n{}\n\n{}{}\n{}\n",
        "幽默风趣型：".green().bold(),
        triple.humor,
        triple.humor,
        "情绪价值型：".blue().bold(),
        triple.empathy,
        triple.empathy,
        "好奇反问型：".yellow().bold(),
        triple.curiosity,
        triple.curiosity,
    )
}

#[cfg(test)]
mod tests {
    use super::render_blocks;
    use crate::suggestion::parse_suggestions;

    #[test]
    fn blocks_show_each_suggestion_labeled_and_echoed() {
        let raw = r#"{"humor":"哈哈当然在，有啥好事儿？","empathy":"在呢，怎么了？","curiosity":"在的，发生什么了？"}"#;
        let rendered = render_blocks(&parse_suggestions(raw));

        for label in ["幽默风趣型：", "情绪价值型：", "好奇反问型："] {
            assert!(rendered.contains(label));
        }
        for suggestion in ["哈哈当然在，有啥好事儿？", "在呢，怎么了？", "在的，发生什么了？"] {
            assert_eq!(rendered.matches(suggestion).count(), 2);
        }
    }

    #[test]
    fn degraded_triple_renders_the_same_text_in_every_block() {
        let rendered = render_blocks(&parse_suggestions("抱歉，我帮不了你。"));
        assert_eq!(rendered.matches("抱歉，我帮不了你。").count(), 6);
    }
}
