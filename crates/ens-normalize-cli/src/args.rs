use clap::{Parser, Subcommand};
use ens_normalize::SpecSource;

/// Normalize, beautify and hash ENS names.
#[derive(Debug, Parser)]
#[command(name = "ensn", version, next_display_order = None)]
pub struct Ensn {
    /// Path to a `spec.json` file, or `embedded` for the built-in tables.
    #[arg(long, global = true, env = "ENS_NORMALIZE_SPEC", value_name = "PATH")]
    pub spec: Option<String>,

    #[command(subcommand)]
    pub cmd: EnsnSubcommand,
}

impl Ensn {
    /// The spec source selected on the command line, if any.
    pub fn spec_source(&self) -> Option<SpecSource> {
        self.spec.clone().map(SpecSource::from)
    }
}

#[derive(Debug, Subcommand)]
pub enum EnsnSubcommand {
    /// Print the canonical form of each name.
    #[command(visible_alias = "n")]
    Normalize {
        /// The names. Read from stdin, one per line, when omitted.
        names: Vec<String>,
    },

    /// Print the display form of each name.
    #[command(visible_alias = "b")]
    Beautify { names: Vec<String> },

    /// Normalize each name and print its namehash.
    #[command(visible_alias = "nh")]
    Namehash { names: Vec<String> },

    /// Print a per-label report of each name.
    #[command(visible_alias = "i")]
    Inspect {
        names: Vec<String>,

        /// Print one JSON object per name.
        #[arg(long, short)]
        json: bool,
    },
}

impl EnsnSubcommand {
    pub fn names(&self) -> &[String] {
        match self {
            Self::Normalize { names }
            | Self::Beautify { names }
            | Self::Namehash { names }
            | Self::Inspect { names, .. } => names,
        }
    }
}
