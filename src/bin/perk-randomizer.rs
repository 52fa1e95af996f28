//! Command-line front end: manage a roster and run randomizations.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use perk_randomizer::allocator::Allocation;
use perk_randomizer::core::{PlayerRef, RunConfig, Strategy};
use perk_randomizer::roster::{Catalog, NewPlayer};
use perk_randomizer::session::Randomizer;
use perk_randomizer::store::{FileStore, Repository};

#[derive(Parser)]
#[command(name = "perk-randomizer")]
#[command(about = "Randomly assign perks to a roster of players")]
struct Cli {
    #[arg(
        long,
        help = "Directory holding the roster and config",
        default_value = ".perk-randomizer"
    )]
    store: PathBuf,

    #[arg(long, help = "Perk/character catalog (JSON)")]
    catalog: Option<PathBuf>,

    #[arg(long, help = "Seed for a replayable run (overrides the stored seed)")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List players and the current run setup.
    Players,
    /// Add a player.
    AddPlayer {
        #[arg(long)]
        name: String,
        #[arg(long = "perk")]
        perks: Vec<String>,
        #[arg(long = "character")]
        characters: Vec<String>,
    },
    /// Remove a player from the roster and the run.
    RemovePlayer { id: String },
    /// Include a player in the next run.
    Select { id: String },
    /// Exclude a player from the next run.
    Deselect { id: String },
    /// Flip whether perks may repeat across players.
    ToggleOverlap,
    /// Choose how perks are distributed.
    Strategy { strategy: StrategyArg },
    /// Draw perks for the selected players.
    Randomize,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Greedy,
    Pooled,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Greedy => Strategy::GreedyExclusion,
            StrategyArg::Pooled => Strategy::PooledBlocks,
        }
    }
}

fn main() {
    perk_randomizer::logging::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut repo = Repository::new(FileStore::new(&cli.store));
    let mut roster = repo.load_roster()?;
    let mut config = repo.load_config()?;

    let catalog = match &cli.catalog {
        Some(path) => Some(Catalog::from_json(&std::fs::read_to_string(path)?)?),
        None => None,
    };

    match cli.command {
        Command::Players => {
            for player in roster.players() {
                let mark = if config.players.contains(&player.id) { "*" } else { " " };
                println!(
                    "{mark} {}  {}  ({} perks, {} characters)",
                    player.id,
                    player.name,
                    player.available_perk_ids.len(),
                    player.available_character_ids.len()
                );
            }
            println!(
                "avoid overlap: {}  strategy: {}  perks per player: {}",
                config.avoid_overlap, config.strategy, config.perks_per_player
            );
        }
        Command::AddPlayer { name, perks, characters } => {
            let player = NewPlayer::named(name)
                .with_perks(perks)
                .with_characters(characters);
            let id = roster.add_player(player);
            repo.save_roster(&roster)?;
            println!("{id}");
        }
        Command::RemovePlayer { id } => {
            let id = PlayerRef::new(id);
            if roster.remove_player(&id).is_some() {
                repo.save_roster(&roster)?;
            }
            config.remove_player(&id);
            repo.save_config(&config)?;
        }
        Command::Select { id } => {
            let id = PlayerRef::new(id);
            if !config.players.contains(&id) {
                config.add_player(id);
                config.validate(&roster)?;
                repo.save_config(&config)?;
            }
        }
        Command::Deselect { id } => {
            config.remove_player(&PlayerRef::new(id));
            repo.save_config(&config)?;
        }
        Command::ToggleOverlap => {
            config.toggle_avoid_overlap();
            repo.save_config(&config)?;
            println!("avoid overlap: {}", config.avoid_overlap);
        }
        Command::Strategy { strategy } => {
            config.strategy = strategy.into();
            repo.save_config(&config)?;
        }
        Command::Randomize => {
            if let Some(seed) = cli.seed {
                config.seed = Some(seed);
            }
            randomize(&roster, &config, catalog)?;
        }
    }

    Ok(())
}

fn randomize(
    roster: &perk_randomizer::roster::Roster,
    config: &RunConfig,
    catalog: Option<Catalog>,
) -> Result<(), Box<dyn std::error::Error>> {
    let randomizer = catalog.map_or_else(Randomizer::new, Randomizer::with_catalog);

    let mut latest: Option<Allocation> = None;
    let seed = randomizer.run(roster, config, &mut latest)?;
    info!(seed, "run complete");

    let Some(result) = latest else {
        return Ok(());
    };

    for (player_ref, hand) in result.iter() {
        let name = roster.get(player_ref).map_or(player_ref.as_str(), |p| p.name.as_str());
        println!("{name}");
        if hand.is_empty() {
            println!("  No perks selected");
        }
        for perk in hand {
            let label = randomizer.catalog().map_or(perk.as_str(), |c| c.perk_name(perk));
            println!("  - {label}");
        }
    }
    println!("seed: {seed}");

    Ok(())
}
