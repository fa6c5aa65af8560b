use std::path::PathBuf;

use mindweave::cli::{Cli, Commands, ConfigAction};
use mindweave::config::MindMapConfig;
use mindweave::error::{MindweaveError, Result};
use mindweave::pipeline::MindMapGenerator;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            input,
            output,
            seed,
            pretty,
        } => {
            cmd_generate(cli.config, input, output, seed, pretty)?;
        }
        Commands::Analyze { input, limit } => {
            cmd_analyze(cli.config, input, limit)?;
        }
        Commands::Config { action } => {
            cmd_config(cli.config, action)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose {
        "mindweave=debug"
    } else {
        "mindweave=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn cmd_generate(
    config_path: Option<PathBuf>,
    input: PathBuf,
    output: Option<PathBuf>,
    seed: Option<u64>,
    pretty: bool,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(seed) = seed {
        config.layout.seed = seed;
    }

    let text = read_input(&input)?;
    let generator = MindMapGenerator::new(config)?;
    let (map, stats) = generator.generate_with_stats(&text)?;

    let json = if pretty {
        serde_json::to_string_pretty(&map)
    } else {
        serde_json::to_string(&map)
    }
    .map_err(|e| MindweaveError::Json {
        source: e,
        context: "Failed to serialize mind map".to_string(),
    })?;

    match output {
        Some(path) => {
            std::fs::write(&path, json).map_err(|e| MindweaveError::Io {
                source: e,
                context: format!("Failed to write output file: {:?}", path),
            })?;
            println!("✓ Mind map written to {}", path.display());
            println!(
                "  {} nodes, {} edges, confidence {}",
                map.nodes.len(),
                map.edges.len(),
                map.confidence
            );
            println!(
                "  {} sentences, {} keywords, {} clusters in {}ms",
                stats.sentences, stats.keywords, stats.clusters, stats.processing_time_ms
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn cmd_analyze(config_path: Option<PathBuf>, input: PathBuf, limit: usize) -> Result<()> {
    let config = load_config(config_path)?;
    let text = read_input(&input)?;
    let generator = MindMapGenerator::new(config)?;
    let analysis = generator.analyze(&text)?;

    println!("Document Analysis");
    println!("=================");
    println!(
        "\nSentences: {}   Mean similarity: {:.3}",
        analysis.stats.sentences, analysis.stats.mean_similarity
    );

    println!("\nHeadings: {}", analysis.structure.headings.len());
    for heading in analysis.structure.headings.iter().take(limit) {
        println!("  [L{}] {}", heading.level, heading.text);
    }

    println!("\nTop keywords:");
    for keyword in analysis.keywords.iter().take(limit) {
        println!(
            "  {:<24} score {:.4}  (in {} sentences)",
            keyword.term, keyword.score, keyword.doc_freq
        );
    }

    println!("\nTop keyphrases:");
    for phrase in analysis.keyphrases.iter().take(limit) {
        println!(
            "  {:<36} score {:.1}  (x{})",
            phrase.phrase, phrase.score, phrase.frequency
        );
    }

    Ok(())
}

fn cmd_config(config_path: Option<PathBuf>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = load_config(config_path)?;
            let json = serde_json::to_string_pretty(&config).map_err(|e| MindweaveError::Json {
                source: e,
                context: "Failed to serialize config".to_string(),
            })?;
            println!("{json}");
        }
        ConfigAction::Validate { file } => {
            let path = file.unwrap_or(MindMapConfig::default_path()?);
            MindMapConfig::load(&path)?;
            println!("✓ Configuration is valid");
        }
        ConfigAction::Init { force } => {
            let path = MindMapConfig::default_path()?;

            if path.exists() && !force {
                println!("Configuration file already exists at: {}", path.display());
                println!("Use --force to overwrite");
                return Ok(());
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| MindweaveError::Io {
                    source: e,
                    context: format!("Failed to create config directory: {:?}", parent),
                })?;
            }

            MindMapConfig::default().save(&path)?;
            println!("✓ Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn load_config(config_path: Option<PathBuf>) -> Result<MindMapConfig> {
    let path = match config_path {
        Some(path) => path,
        None => MindMapConfig::default_path()?,
    };

    if !path.exists() {
        tracing::debug!(
            "Config file not found, using defaults. Run 'mindweave config init' to create one."
        );
        return Ok(MindMapConfig::default());
    }

    MindMapConfig::load(&path)
}

fn read_input(path: &PathBuf) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MindweaveError::Io {
        source: e,
        context: format!("Failed to read input file: {:?}", path),
    })
}
