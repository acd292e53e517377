use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use csvw_to_jsonld::{Metadata, Processor};
use metadata::BASIC_METADATA;
use std::{fs, path::PathBuf};
use tracing::{info, Level};

mod metadata;

/// CSVW to JSON-LD Converter
/// Converts CSV files to JSON-LD format based on a CSVW metadata document
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output for detailed processing information
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV file according to a metadata document
    Convert {
        /// Path to the CSVW metadata document describing the CSV
        #[arg(short, long, value_name = "PATH TO METADATA")]
        metadata: PathBuf,

        /// Output file for the generated JSON-LD (stdout when omitted)
        #[arg(short, long, value_name = "OUTPUT FILE PATH")]
        output: Option<PathBuf>,
    },
    /// Generate a starter metadata document
    GenerateMetadata {
        /// Output path for the generated metadata document
        #[arg(
            short,
            long,
            default_value = "metadata.jsonc",
            value_name = "OUTPUT PATH"
        )]
        output: PathBuf,
    },
    /// Validate a metadata document
    Validate {
        /// Path to the metadata document to validate
        #[arg(
            short,
            long,
            default_value = "metadata.jsonc",
            value_name = "PATH TO METADATA"
        )]
        metadata: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with appropriate level. Logs go to stderr so a
    // conversion printed to stdout stays valid JSON.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("CSVW to JSON-LD Converter starting up...");

    match &cli.command {
        Commands::GenerateMetadata { output } => generate_metadata_command(output),
        Commands::Validate { metadata } => validate_command(metadata),
        Commands::Convert { metadata, output } => convert_command(metadata, output).await,
    }
}

async fn convert_command(metadata_path: &PathBuf, output: &Option<PathBuf>) -> Result<()> {
    // Verify metadata file exists
    if !metadata_path.exists() {
        anyhow::bail!("Metadata file not found: {}", metadata_path.display());
    }

    // The metadata's parent directory anchors relative CSV paths
    let base_path = metadata_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Could not determine parent directory of metadata file"))?;

    info!("Loading metadata from {}", metadata_path.display());
    let metadata = Metadata::from_file(metadata_path)
        .context("Failed to load metadata. See errors for additional details:")?;

    info!("Validating metadata configuration...");
    metadata.validate().context("Failed to validate metadata")?;

    info!("Beginning CSV conversion...");
    let processor = Processor::with_base_path(metadata, base_path);
    let graph = processor
        .process()
        .await
        .context("Failed to convert CSV file")?;

    let rendered = serde_json::to_string_pretty(&graph).context("Failed to serialize output")?;

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .context(format!("Failed to write output to: {}", path.display()))?;
            info!("Wrote JSON-LD to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    info!("Conversion completed successfully");
    Ok(())
}

fn generate_metadata_command(output: &PathBuf) -> Result<()> {
    info!("Generating metadata template...");

    // if output is a directory, append the default file name
    let full_file_output_path = if output.is_dir() {
        output.join("metadata.jsonc")
    } else {
        output.into()
    };

    fs::write(&full_file_output_path, BASIC_METADATA)
        .context(format!("Failed to write metadata to: {}", output.display()))?;

    info!(
        "Successfully generated metadata template at: {}",
        full_file_output_path.display()
    );
    Ok(())
}

fn validate_command(metadata_path: &PathBuf) -> Result<()> {
    info!("Validating metadata...");

    // Verify metadata file exists
    if !metadata_path.exists() {
        anyhow::bail!(
            "Metadata file not found: {}. Try using --metadata <PATH TO METADATA>",
            metadata_path.display()
        );
    }

    // Attempt to deserialize the metadata to validate it
    let metadata = Metadata::from_file(metadata_path)
        .context("Failed to parse metadata. See errors for additional details:")?;

    // Run additional validation checks
    metadata.validate().context("Failed to validate metadata")?;

    info!("Metadata validation successful");
    info!(
        "Columns: {}",
        metadata.table_schema.columns.len()
    );
    Ok(())
}
