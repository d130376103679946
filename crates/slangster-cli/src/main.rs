use clap::{Parser, Subcommand};
use slangster_analysis::AnalysisEngine;

#[derive(Debug, Parser)]
#[command(name = "slangster-cli")]
#[command(about = "Slangster text analysis command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze emoticon emotions in a piece of text
    Analyze {
        text: String,
        /// Include frequency-boosted intensity scores
        #[arg(long)]
        intensity: bool,
    },
    /// Suggest emoticons for a target emotion
    Suggest { emotion: String },
    /// Run slang, formality, and sarcasm analysis on text
    Text { text: String },
    /// Summarize the emotional flow of a message sequence
    Flow {
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// List every known emotion with its weight and emoticons
    Emotions,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = slangster_core::load_app_config()?;
    let engine = AnalysisEngine::with_datasets(
        config.emoticon_lexicon_path.as_deref(),
        config.slang_glossary_path.as_deref(),
    );

    let cli = Cli::parse();
    let output = match cli.command {
        Commands::Analyze { text, intensity } => {
            let analysis = engine.emotions().analyze(&text);
            if intensity {
                serde_json::json!({
                    "analysis": analysis,
                    "intensity": engine.emotions().intensity(&text),
                })
            } else {
                serde_json::to_value(analysis)?
            }
        }
        Commands::Suggest { emotion } => {
            serde_json::to_value(engine.emotions().suggest(&emotion))?
        }
        Commands::Text { text } => serde_json::to_value(engine.analyze_text(&text))?,
        Commands::Flow { messages } => serde_json::to_value(engine.conversation_flow(&messages))?,
        Commands::Emotions => serde_json::to_value(engine.emotions().emotion_catalog())?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
