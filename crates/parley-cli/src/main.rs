use anyhow::Result;
use clap::Parser;
use parley_cli::app;
use parley_core::ChatModel;

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Parley - chat with an OpenAI model from the terminal")]
#[command(version)]
struct Cli {
    /// Run a single prompt and exit
    #[arg(short, long)]
    prompt: Option<String>,

    /// Model to use (gpt3.5, gpt4)
    #[arg(short, long)]
    model: Option<ChatModel>,

    /// Print the reply without code-block formatting (single-prompt mode)
    #[arg(long)]
    raw: bool,

    /// Color theme (dark, tokyo-night, dracula)
    #[arg(long, default_value = "dark")]
    theme: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = parley_core::Settings::load();
    let model = cli.model.unwrap_or(settings.llm.model);

    if let Some(prompt) = cli.prompt {
        app::run_single_prompt(&settings, &prompt, model, cli.raw).await?;
    } else {
        app::run_repl(settings, model, &cli.theme).await?;
    }

    Ok(())
}
