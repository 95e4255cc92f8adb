use crate::config::constants::{DEFAULT_COMPONENTS, PIPELINE_NAME};
use crate::dataset::Dataset;
use crate::dump::{self, OutputFormat};
use clap::{Parser, Subcommand};
use partner_core::components::{PartnerSources, register_components};
use partner_core::error::Result;
use partner_core::model::IndividualPartner;
use partner_core::pipeline::{ComponentRegistry, PipelineBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Subcommand)]
#[command(version, about, long_about = None)]
pub enum Commands {
    /// Assemble partners and dump them
    Build {
        /// JSON dataset with partners, addresses and phones
        #[clap(short, long)]
        data: Option<PathBuf>,
        /// Components to run, in order
        #[clap(
            short,
            long,
            value_delimiter = ',',
            default_values = DEFAULT_COMPONENTS
        )]
        components: Vec<String>,
        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Output path, stdout when omitted
        #[clap(short = 'o', long = "output")]
        output_path: Option<PathBuf>,
    },

    /// List the available components
    Components,
}

/// Partner builder command
#[derive(Parser)]
#[command(about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Registry holding the partner components over the given sources
pub fn partner_registry(sources: &PartnerSources) -> ComponentRegistry<IndividualPartner> {
    let mut registry = ComponentRegistry::new();
    register_components(&mut registry, sources);
    registry
}

pub async fn build_command(
    data: Option<PathBuf>,
    components: Vec<String>,
    format: OutputFormat,
    output_path: Option<PathBuf>,
) -> Result<()> {
    debug!("Starting build command");
    debug!("Data: {:?}", data);
    debug!("Components: {:?}", components);
    debug!("Format: {:?}", format);

    let dataset = match &data {
        Some(path) => Dataset::load(path).await?,
        None => Dataset::sample(),
    };

    let partners = build_partners(dataset, &components).await?;
    info!("Built {} partners", partners.len());

    let rendered = dump::render(&partners, format)?;
    match output_path {
        Some(path) => write_output(&path, &rendered).await?,
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Compose the named components over a dataset and run them
pub async fn build_partners(
    dataset: Dataset,
    components: &[String],
) -> Result<Vec<IndividualPartner>> {
    let registry = Arc::new(partner_registry(&dataset.into_sources()));
    let pipeline = PipelineBuilder::new(PIPELINE_NAME, registry)
        .add_components(components.iter().cloned())?
        .build()?;

    pipeline.build().await
}

pub fn components_command() -> Result<()> {
    let registry = partner_registry(&Dataset::default().into_sources());
    for name in registry.list_components() {
        println!("{name}");
    }
    Ok(())
}

async fn write_output(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content).await?;
    info!("Output written to {}", path.display());
    Ok(())
}
