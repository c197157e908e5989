//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use nahuatl_core::{Orthography, Phoneme, SaltilloGlyph, Vowel};

pub mod g2p;
pub mod generate_config;
pub mod p2g;
pub mod run;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert written words to phoneme tags
    G2p(g2p::G2pArgs),

    /// Spell phoneme tags in a target orthography
    P2g(p2g::P2gArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented engine configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List target orthographies
    Orthographies,

    /// List phoneme tags
    Phonemes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::G2p(args) => args.execute(),
            Commands::P2g(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed by the list command
    pub fn render(&self) -> String {
        match self {
            ListCommands::Orthographies => Orthography::ALL
                .iter()
                .map(|o| format!("{:<10} {}\n", o.as_str(), o.description()))
                .collect(),
            ListCommands::Phonemes => phoneme_inventory()
                .iter()
                .map(|p| {
                    format!(
                        "{:<6} {}\n",
                        p.tag(SaltilloGlyph::GlottalStop),
                        p.tag(SaltilloGlyph::GlottalFricative)
                    )
                })
                .collect(),
        }
    }
}

/// Native phonemes in listing order
fn phoneme_inventory() -> Vec<Phoneme> {
    let mut inventory: Vec<Phoneme> = Vowel::ALL.iter().map(|&v| Phoneme::Short(v)).collect();
    inventory.extend(Vowel::ALL.iter().map(|&v| Phoneme::Long(v)));
    inventory.extend([
        Phoneme::P,
        Phoneme::T,
        Phoneme::K,
        Phoneme::Kw,
        Phoneme::M,
        Phoneme::N,
        Phoneme::L,
        Phoneme::S,
        Phoneme::Sh,
        Phoneme::Tz,
        Phoneme::Ch,
        Phoneme::Tl,
        Phoneme::W,
        Phoneme::J,
        Phoneme::Saltillo,
    ]);
    inventory
}
