//! Faculty network CLI: builds the collaboration network document from a
//! roster CSV and reports on it.

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use faculty_network::insights::{DepartmentCount, RankedMember, SignalCount};
use faculty_network::{DistanceMode, NetworkDocument, NetworkInsights, Pipeline, PipelineConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "faculty-network", version, about = "Faculty collaboration network builder")]
struct Cli {
    /// Output format for reports
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Number of members per ranking
    #[arg(long, default_value_t = 5, global = true)]
    top: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum DistanceArg {
    Raw,
    Inverse,
}

impl From<DistanceArg> for DistanceMode {
    fn from(arg: DistanceArg) -> Self {
        match arg {
            DistanceArg::Raw => DistanceMode::Raw,
            DistanceArg::Inverse => DistanceMode::Inverse,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the network document from a roster CSV
    Build {
        /// Roster CSV file
        input: PathBuf,

        /// Where to write the network document
        #[arg(long, short, default_value = "faculty_network.json")]
        output: PathBuf,

        /// YAML pipeline configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Score faculty pairs on all cores
        #[arg(long)]
        parallel: bool,

        /// Override how edge weights become path lengths
        #[arg(long)]
        distance_mode: Option<DistanceArg>,
    },
    /// Report on a previously built network document
    Insights {
        /// Network document (JSON)
        document: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            input,
            output,
            config,
            parallel,
            distance_mode,
        } => run_build(input, output, config, parallel, distance_mode)
            .and_then(|doc| print_insights(&doc, cli.top, &cli.format)),
        Commands::Insights { document } => NetworkDocument::read_from(&document)
            .with_context(|| format!("Cannot load network document {}", document.display()))
            .and_then(|doc| print_insights(&doc, cli.top, &cli.format)),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_build(
    input: PathBuf,
    output: PathBuf,
    config_path: Option<PathBuf>,
    parallel: bool,
    distance_mode: Option<DistanceArg>,
) -> anyhow::Result<NetworkDocument> {
    let mut config = match config_path {
        Some(path) => PipelineConfig::from_yaml_file(&path)
            .with_context(|| format!("Cannot load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if parallel {
        config.edges.parallel = true;
    }
    if let Some(mode) = distance_mode {
        config.metrics.distance_mode = mode.into();
    }

    info!("faculty-network v{}", faculty_network::version());

    let pipeline = Pipeline::new(config)?;
    let document = pipeline.run_files(&input, &output)?;

    println!("Created {} nodes and {} edges", document.stats.total_nodes, document.stats.total_edges);
    println!("Output saved to: {}", output.display());
    Ok(document)
}

fn print_insights(document: &NetworkDocument, top: usize, format: &OutputFormat) -> anyhow::Result<()> {
    let insights = NetworkInsights::from_document(document, top);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&insights)?);
        }
        OutputFormat::Table => {
            println!("\n=== NETWORK INSIGHTS ===");
            print_ranking(
                &format!("Top {} Collaborators (Highest Degree)", top),
                "Degree",
                &insights.top_collaborators,
            );
            print_ranking(
                &format!("Top {} Bridges Between Departments (Highest Betweenness)", top),
                "Betweenness",
                &insights.top_bridges,
            );
            print_ranking(
                &format!("Top {} Most Influential (Highest PageRank)", top),
                "PageRank",
                &insights.top_influencers,
            );
            print_departments(&insights.department_distribution);
            print_signals(&insights.signal_breakdown);
        }
    }

    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn print_ranking(title: &str, score_label: &str, members: &[RankedMember]) {
    println!("\n{}:", title);
    if members.is_empty() {
        println!("(no faculty members)");
        return;
    }

    let mut table = new_table(vec!["#", "Name", "Department", "H-index", score_label]);
    for (rank, member) in members.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            member.name.clone(),
            member.department.clone(),
            member.h_index.to_string(),
            member.score.to_string(),
        ]);
    }
    println!("{}", table);
}

fn print_departments(distribution: &[DepartmentCount]) {
    println!("\nDepartment Distribution:");
    let mut table = new_table(vec!["Department", "Faculty members"]);
    for entry in distribution {
        table.add_row(vec![entry.department.clone(), entry.members.to_string()]);
    }
    println!("{}", table);
}

fn print_signals(breakdown: &[SignalCount]) {
    println!("\nEdges per Signal:");
    let mut table = new_table(vec!["Signal", "Edges"]);
    for entry in breakdown {
        table.add_row(vec![entry.signal.clone(), entry.edges.to_string()]);
    }
    println!("{}", table);
}
