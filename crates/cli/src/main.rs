//! CLI pour la conception de banques de peptides

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use pepsyn_core::DesignConfig;
use std::path::{Path, PathBuf};

mod commands;
mod fasta;

use commands::{count, disambig, peptide, recode, revtrans};

#[derive(Parser)]
#[command(name = "pepsyn")]
#[command(about = "Conception d'oligos ADN pour banques de peptides", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Fichier de configuration (TOML ou JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Graine du générateur aléatoire
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rétro-traduit des protéines en ADN
    Revtrans {
        /// Fichier FASTA de protéines
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier FASTA de sortie (stdout par défaut)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stratégie d'échantillonnage des codons
        #[arg(short, long, value_enum)]
        sampler: Option<SamplerArg>,
    },

    /// Élimine des sites interdits de la région codante
    Recode {
        /// Fichier FASTA d'ADN
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier FASTA de sortie (stdout par défaut)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Site interdit (répétable; sites de la configuration par défaut)
        #[arg(long = "site")]
        sites: Vec<String>,

        /// Début de la CDS (0 par défaut)
        #[arg(long)]
        cds_start: Option<usize>,

        /// Fin de la CDS (fin de la séquence par défaut)
        #[arg(long)]
        cds_end: Option<usize>,
    },

    /// Énumère toutes les séquences concrètes
    Disambig {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Séquences d'ADN plutôt que protéiques
        #[arg(long)]
        dna: bool,
    },

    /// Compte les séquences concrètes sans les énumérer
    Count {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long)]
        dna: bool,
    },

    /// Découpe des protéines en fragments chevauchants
    Tile {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Longueur des fragments
        #[arg(short, long)]
        length: usize,

        /// Chevauchement entre fragments consécutifs
        #[arg(short = 'p', long, default_value = "0")]
        overlap: usize,
    },

    /// Extrait le peptide C-terminal
    Ctermpep {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        length: usize,

        /// Ajouter un codon stop
        #[arg(long)]
        add_stop: bool,
    },

    /// Complète les protéines courtes avec un linker GGSG
    Pad {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        length: usize,

        /// Extrémité à compléter (N ou C)
        #[arg(short, long, default_value = "C")]
        terminus: String,
    },

    /// Remplace les suites de X par un linker GGSG
    Linker {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum SamplerArg {
    Uniform,
    Weighted,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "info",
        _ => "debug",
    };
    pepsyn_core::init_logging(level);

    match cli.command {
        Commands::Revtrans {
            input,
            output,
            sampler,
        } => {
            revtrans::run(&config, input, output, sampler)?;
        }
        Commands::Recode {
            input,
            output,
            sites,
            cds_start,
            cds_end,
        } => {
            recode::run(&config, input, output, sites, cds_start, cds_end)?;
        }
        Commands::Disambig { input, output, dna } => {
            disambig::run(input, output, dna)?;
        }
        Commands::Count { input, dna } => {
            count::run(input, dna)?;
        }
        Commands::Tile {
            input,
            output,
            length,
            overlap,
        } => {
            peptide::tile(input, output, length, overlap)?;
        }
        Commands::Ctermpep {
            input,
            output,
            length,
            add_stop,
        } => {
            peptide::ctermpep(input, output, length, add_stop)?;
        }
        Commands::Pad {
            input,
            output,
            length,
            terminus,
        } => {
            peptide::pad(input, output, length, &terminus)?;
        }
        Commands::Linker { input, output } => {
            peptide::linker(input, output)?;
        }
    }

    Ok(())
}

/// Charge la configuration, ou les valeurs par défaut sans fichier
fn load_config(path: Option<&Path>) -> Result<DesignConfig> {
    let Some(path) = path else {
        return Ok(DesignConfig::default());
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .with_context(|| format!("lecture de {}", path.display()))?;

    settings
        .try_deserialize::<DesignConfig>()
        .with_context(|| format!("configuration invalide: {}", path.display()))
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("##-"));
    }
    pb.set_message(msg.to_string());
    pb
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb
}
