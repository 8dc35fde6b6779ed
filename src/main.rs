mod config;
mod extract;
mod input;
mod output;
mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jd_import", about = "Save job postings from the clipboard as files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a posting, confirm title/company, and save it
    Save {
        /// Read the posting from a file instead of the clipboard
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Destination folder (default: $SAVE_FOLDER, else ./job-descriptions)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Output format; a failed rtf save falls back to txt
        #[arg(long, value_enum, default_value = "txt")]
        format: output::OutputFormat,
        /// Accept the guessed fields without prompting
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Print the guessed title/company without saving
    Extract {
        /// Read the posting from a file instead of the clipboard
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Save {
            file,
            out_dir,
            format,
            yes,
        } => {
            let text = input::read_posting(file.as_deref())?;
            let guess = extract::extract(&text);

            let (title, company) = if yes {
                (
                    guess.title.unwrap_or_else(|| "Unknown Title".into()),
                    guess.company.unwrap_or_else(|| "Unknown Company".into()),
                )
            } else {
                (
                    prompt::confirm_field("Job title", guess.title.as_deref())?,
                    prompt::confirm_field("Company name", guess.company.as_deref())?,
                )
            };

            let dir = config::save_folder(out_dir);
            let path = output::save_posting(&dir, &company, &title, &text, format)?;
            println!("Job description saved to: {}", path.display());
            Ok(())
        }
        Commands::Extract { file, json } => {
            let text = input::read_posting(file.as_deref())?;
            let result = extract::extract(&text);
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("Title:   {}", result.title.as_deref().unwrap_or("-"));
                println!("Company: {}", result.company.as_deref().unwrap_or("-"));
            }
            Ok(())
        }
    }
}
