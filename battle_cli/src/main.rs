//! battle_cli - Narrate a duel between two roster characters on the console

use anyhow::{Context, Result};
use battle_core::{default_roster, Battle, ConsoleNarrator, Roster, SilentNarrator};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Run a turn-based duel between two characters
#[derive(Parser, Debug)]
#[command(name = "battle", version, about)]
struct Cli {
    /// Roster TOML file (defaults to the bundled roster)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Character that attacks first
    #[arg(long, default_value = "Knight")]
    first: String,

    /// Character that attacks second
    #[arg(long, default_value = "Brigand")]
    second: String,

    /// Seed for reproducible battles
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many turns
    #[arg(long)]
    max_turns: Option<u32>,

    /// Print the outcome as JSON instead of narrating
    #[arg(long)]
    json: bool,

    /// List the roster's characters and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so narration on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("battle_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let roster = match cli.roster {
        Some(ref path) => Roster::load(path)
            .with_context(|| format!("Failed to load roster from {}", path.display()))?,
        None => default_roster(),
    };

    if cli.list {
        print_roster(&roster);
        return Ok(());
    }

    let mut first = roster
        .build(&cli.first)
        .with_context(|| format!("Cannot field '{}'", cli.first))?;
    let mut second = roster
        .build(&cli.second)
        .with_context(|| format!("Cannot field '{}'", cli.second))?;

    tracing::debug!(first = %first.name(), second = %second.name(), seed = ?cli.seed, "characters fielded");

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut battle = match cli.max_turns {
        Some(max) => Battle::new().with_max_turns(max),
        None => Battle::new(),
    };

    if cli.json {
        let outcome = battle.run(&mut first, &mut second, &mut SilentNarrator, &mut rng)?;
        println!("{}", outcome.to_json()?);
    } else {
        let outcome = battle.run(&mut first, &mut second, &mut ConsoleNarrator, &mut rng)?;
        println!();
        println!("{}", outcome.summary());
        println!("{}", outcome.damage_report());
        println!("Total turns: {}", outcome.turns);
    }

    Ok(())
}

fn print_roster(roster: &Roster) {
    println!("{:<16} {:>6} {:>6} {:>6} {:>5}  Weapon", "Name", "HP", "ATK", "DEF", "LVL");
    for c in &roster.characters {
        let weapon = c.weapon.as_deref().unwrap_or("Unarmed");
        println!(
            "{:<16} {:>6} {:>6} {:>6} {:>5}  {}",
            c.name, c.max_hp, c.attack, c.defense, c.level, weapon
        );
    }

    if !roster.weapons.is_empty() {
        println!();
        println!("{:<16} {:>6} {:>9}", "Weapon", "Power", "Min level");
        for w in &roster.weapons {
            println!("{:<16} {:>6} {:>9}", w.name(), w.power, w.min_level);
        }
    }
}
