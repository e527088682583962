use crate::core::export::DEFAULT_VOICE_MODEL;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "guion")]
#[command(about = "Generador de guiones de VSL")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Force CLI mode (skip TUI)
    #[arg(long)]
    pub cli: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a VSL script and export the selected artifacts
    Generate {
        /// Product or service name
        #[arg(long)]
        product: String,

        /// Presenter or business name
        #[arg(long, default_value = "")]
        presenter: String,

        /// Target audience
        #[arg(long, default_value = "")]
        audience: String,

        /// Main pain point the product solves
        #[arg(long = "pain", default_value = "")]
        pain_point: String,

        /// Key benefits, comma separated
        #[arg(long, default_value = "")]
        benefits: String,

        /// Price / payment terms
        #[arg(long = "price", default_value = "")]
        pricing: String,

        /// Guarantee offered
        #[arg(long, default_value = "")]
        guarantee: String,

        /// Call to action
        #[arg(long = "cta", default_value = "")]
        call_to_action: String,

        /// Niche label (see `guion niches`)
        #[arg(long)]
        niche: Option<String>,

        /// Export a PDF of the script
        #[arg(long)]
        pdf: bool,

        /// Synthesize Spanish narration (requires piper)
        #[arg(long)]
        narration: bool,

        /// Build an HTML slide deck from the script segments
        #[arg(long)]
        slides: bool,

        /// Upload the script to the configured drive endpoint
        #[arg(long)]
        upload: bool,

        /// Piper voice model used for narration
        #[arg(long, default_value = DEFAULT_VOICE_MODEL)]
        voice_model: String,
    },

    /// List saved scripts and export artifacts
    List,

    /// Print the niche table with its example hooks
    Niches,

    /// Open TUI interface
    Tui,
}
