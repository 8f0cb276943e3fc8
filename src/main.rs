//! # product-forms
//!
//! Command line front end for the product forms. Each subcommand fills one
//! form, submits it once and prints the form's status line and detail panel.
//!
//! ```bash
//! product-forms upload ./mug.jpg
//! product-forms get 7
//! product-forms update 7 --price 9.99 --features "ceramic, 350ml"
//! product-forms --yes delete 7
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use product_forms::config::{parse_timeout, ConsoleConfig, BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
use product_forms::forms::{DeleteInput, LookupInput, UpdateInput, UploadInput};
use product_forms::framework::{AlwaysConfirm, Confirm, FormError, FormSnapshot, FormState};
use product_forms::model::ImageFile;
use product_forms::runtime::{setup_tracing, ConsoleError, ProductConsole};
use product_forms::view::{StatusColor, StatusLine};
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "product-forms", version, about = "Upload, look up, update and delete products")]
struct Cli {
    /// Base URL of the product API.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = TIMEOUT_ENV, value_parser = parse_timeout)]
    timeout: Option<Duration>,

    /// Skip the delete confirmation prompt.
    #[arg(long, short)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyzes a product photo.
    Upload { path: PathBuf },
    /// Shows one product.
    Get { id: String },
    /// Changes the given fields of a product.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        /// Comma separated list.
        #[arg(long)]
        features: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        dimensions: Option<String>,
    },
    /// Deletes a product after confirmation.
    Delete { id: String },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Could not read image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Asks on stderr and reads the answer from stdin.
struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();
    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    match run(cli).await {
        Ok(snapshot) => {
            print_snapshot(&snapshot);
            match snapshot.state {
                FormState::Error => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            }
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<FormSnapshot, CliError> {
    let mut config = ConsoleConfig::new(cli.base_url);
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    let confirm: Arc<dyn Confirm> = if cli.yes {
        Arc::new(AlwaysConfirm)
    } else {
        Arc::new(PromptConfirm)
    };
    let console = ProductConsole::connect(&config, confirm)?;

    let snapshot = match cli.command {
        Command::Upload { path } => {
            let image = ImageFile::from_path(&path)
                .await
                .map_err(|source| CliError::Image { path, source })?;
            console.upload.submit(UploadInput::new(image)).await?
        }
        Command::Get { id } => console.lookup.submit(LookupInput::new(id)).await?,
        Command::Update {
            id,
            name,
            price,
            features,
            brand,
            dimensions,
        } => {
            let input = UpdateInput {
                product_id: id,
                product_name: name.unwrap_or_default(),
                price: price.unwrap_or_default(),
                features: features.unwrap_or_default(),
                brand: brand.unwrap_or_default(),
                dimensions: dimensions.unwrap_or_default(),
            };
            console.update.submit(input).await?
        }
        Command::Delete { id } => console.delete.submit(DeleteInput::new(id)).await?,
    };

    console.shutdown().await?;
    Ok(snapshot)
}

fn print_snapshot(snapshot: &FormSnapshot) {
    if !snapshot.status.text.is_empty() {
        println!("{}", paint(&snapshot.status));
    }
    print!("{}", snapshot.panel);
}

fn paint(status: &StatusLine) -> ColoredString {
    let text = status.text.as_str();
    match status.color {
        StatusColor::Neutral => text.normal(),
        StatusColor::Blue => text.blue(),
        StatusColor::Green => text.green(),
        StatusColor::Red => text.red(),
    }
}
