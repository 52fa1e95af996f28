//! Wiring between the surrounding application and the allocator.
//!
//! The application supplies three collaborators:
//! - a `RosterProvider` (who exists and what they may draw),
//! - a `RunConfigProvider` (who takes part, and how),
//! - a `ResultsSink` (where the fresh result goes).
//!
//! `Randomizer` pulls from the first two, validates, allocates, and pushes
//! the result into the sink. Each run starts from nothing: there is no state
//! carried between runs.
//!
//! ```
//! use perk_randomizer::core::{PerkRng, RunConfig};
//! use perk_randomizer::roster::{NewPlayer, Roster};
//! use perk_randomizer::session::Randomizer;
//! use perk_randomizer::allocator::Allocation;
//!
//! let mut roster = Roster::new();
//! let a = roster.add_player(NewPlayer::named("A").with_perks(["x", "y", "z"]));
//! let b = roster.add_player(NewPlayer::named("B").with_perks(["x", "y", "z"]));
//! let config = RunConfig::new([a.clone(), b.clone()]).with_avoid_overlap(true);
//!
//! let mut latest: Option<Allocation> = None;
//! Randomizer::new()
//!     .run_with_rng(&roster, &config, &mut latest, &mut PerkRng::new(1))
//!     .unwrap();
//!
//! let result = latest.unwrap();
//! assert_eq!(result.get(&a).unwrap().len(), 3);
//! assert!(result.get(&b).unwrap().is_empty());
//! ```

use tracing::{debug, warn};

use crate::allocator::{strategy_for, Allocation};
use crate::core::{ConfigError, PerkRng, RunConfig};
use crate::roster::{Catalog, EligibilityResolver, Roster};
use crate::store::{KeyValueStore, Repository};

/// Supplies the current roster.
pub trait RosterProvider {
    fn roster(&self) -> Roster;
}

/// Supplies the configuration for the next run.
pub trait RunConfigProvider {
    fn run_config(&self) -> RunConfig;
}

/// Receives the result of a run.
pub trait ResultsSink {
    fn accept(&mut self, allocation: Allocation);
}

impl RosterProvider for Roster {
    fn roster(&self) -> Roster {
        self.clone()
    }
}

impl RunConfigProvider for RunConfig {
    fn run_config(&self) -> RunConfig {
        self.clone()
    }
}

impl<S: KeyValueStore> RosterProvider for Repository<S> {
    fn roster(&self) -> Roster {
        self.read_roster().unwrap_or_else(|err| {
            warn!(%err, "roster unavailable, using empty roster");
            Roster::default()
        })
    }
}

impl<S: KeyValueStore> RunConfigProvider for Repository<S> {
    fn run_config(&self) -> RunConfig {
        self.read_config().unwrap_or_else(|err| {
            warn!(%err, "config unavailable, using default");
            RunConfig::default()
        })
    }
}

/// Keeps only the latest result.
impl ResultsSink for Option<Allocation> {
    fn accept(&mut self, allocation: Allocation) {
        *self = Some(allocation);
    }
}

/// Keeps every result, oldest first.
impl ResultsSink for Vec<Allocation> {
    fn accept(&mut self, allocation: Allocation) {
        self.push(allocation);
    }
}

impl<F: FnMut(Allocation)> ResultsSink for F {
    fn accept(&mut self, allocation: Allocation) {
        self(allocation);
    }
}

/// Runs randomizations.
///
/// With a catalog, a player's pool also includes the perks of their selected
/// characters. Without one, only directly selected perks are eligible.
#[derive(Clone, Debug, Default)]
pub struct Randomizer {
    catalog: Option<Catalog>,
}

impl Randomizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Some(catalog),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Run once, seeding from the config or from entropy.
    ///
    /// Returns the seed used, so the run can be replayed.
    pub fn run<R, C, K>(&self, roster: &R, config: &C, sink: &mut K) -> Result<u64, ConfigError>
    where
        R: RosterProvider + ?Sized,
        C: RunConfigProvider + ?Sized,
        K: ResultsSink + ?Sized,
    {
        let config = config.run_config();
        let mut rng = config.seed.map_or_else(PerkRng::from_entropy, PerkRng::new);
        let seed = rng.seed();
        self.execute(&roster.roster(), &config, sink, &mut rng)?;
        Ok(seed)
    }

    /// Run once with the given RNG. The config's own seed is ignored.
    pub fn run_with_rng<R, C, K>(
        &self,
        roster: &R,
        config: &C,
        sink: &mut K,
        rng: &mut PerkRng,
    ) -> Result<(), ConfigError>
    where
        R: RosterProvider + ?Sized,
        C: RunConfigProvider + ?Sized,
        K: ResultsSink + ?Sized,
    {
        self.execute(&roster.roster(), &config.run_config(), sink, rng)
    }

    fn execute<K>(
        &self,
        roster: &Roster,
        config: &RunConfig,
        sink: &mut K,
        rng: &mut PerkRng,
    ) -> Result<(), ConfigError>
    where
        K: ResultsSink + ?Sized,
    {
        config.validate(roster)?;

        let strategy = strategy_for(config);
        let allocation = match &self.catalog {
            Some(catalog) => {
                strategy.allocate(&config.players, &EligibilityResolver::new(roster, catalog), rng)
            }
            None => strategy.allocate(&config.players, roster, rng),
        };

        debug!(
            seed = rng.seed(),
            strategy = %config.strategy,
            players = allocation.len(),
            short = allocation.shortfall(config.perks_per_player).count(),
            "randomized"
        );

        sink.accept(allocation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerRef, Strategy};
    use crate::roster::NewPlayer;
    use crate::store::MemoryStore;

    fn roster_and_ids(n: usize, perks: &[&str]) -> (Roster, Vec<PlayerRef>) {
        let mut roster = Roster::new();
        let ids = (0..n)
            .map(|i| {
                let player = NewPlayer::named(format!("P{i}")).with_perks(perks.iter().copied());
                roster.add_player(player)
            })
            .collect();
        (roster, ids)
    }

    #[test]
    fn test_invalid_config_rejected_and_sink_untouched() {
        let (roster, _) = roster_and_ids(1, &["a"]);
        let config = RunConfig::new([PlayerRef::new("ghost")]);
        let mut results: Vec<Allocation> = Vec::new();

        let err = Randomizer::new().run(&roster, &config, &mut results).unwrap_err();
        assert_eq!(err, ConfigError::UnknownPlayer(PlayerRef::new("ghost")));
        assert!(results.is_empty());
    }

    #[test]
    fn test_seeded_runs_replay() {
        let (roster, ids) = roster_and_ids(2, &["a", "b", "c", "d", "e", "f", "g", "h"]);
        let config = RunConfig::new(ids).with_avoid_overlap(true).with_seed(99);
        let mut results: Vec<Allocation> = Vec::new();

        let randomizer = Randomizer::new();
        assert_eq!(randomizer.run(&roster, &config, &mut results).unwrap(), 99);
        assert_eq!(randomizer.run(&roster, &config, &mut results).unwrap(), 99);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_returned_seed_replays_entropy_run() {
        let (roster, ids) = roster_and_ids(3, &["a", "b", "c", "d", "e", "f"]);
        let config = RunConfig::new(ids).with_avoid_overlap(true);
        let mut first: Option<Allocation> = None;
        let mut replay: Option<Allocation> = None;

        let randomizer = Randomizer::new();
        let seed = randomizer.run(&roster, &config, &mut first).unwrap();
        randomizer
            .run(&roster, &config.clone().with_seed(seed), &mut replay)
            .unwrap();

        assert_eq!(first, replay);
    }

    #[test]
    fn test_latest_sink_replaces() {
        let (roster, ids) = roster_and_ids(1, &["a", "b", "c", "d", "e"]);
        let config = RunConfig::new(ids.clone());
        let mut latest: Option<Allocation> = None;

        let randomizer = Randomizer::new();
        let mut rng = PerkRng::new(1);
        randomizer.run_with_rng(&roster, &config, &mut latest, &mut rng).unwrap();
        randomizer
            .run_with_rng(&roster, &RunConfig::default(), &mut latest, &mut rng)
            .unwrap();

        assert!(latest.unwrap().is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let (roster, ids) = roster_and_ids(1, &["a"]);
        let config = RunConfig::new(ids);
        let mut count = 0;

        let mut sink = |_: Allocation| count += 1;
        Randomizer::new()
            .run_with_rng(&roster, &config, &mut sink, &mut PerkRng::new(0))
            .unwrap();

        assert_eq!(count, 1);
    }

    #[test]
    fn test_repository_as_provider() {
        let (roster, ids) = roster_and_ids(2, &["a", "b", "c", "d", "e", "f", "g", "h"]);
        let mut repo = Repository::new(MemoryStore::new());
        repo.save_roster(&roster).unwrap();
        repo.save_config(&RunConfig::new(ids).with_strategy(Strategy::PooledBlocks))
            .unwrap();

        let mut latest: Option<Allocation> = None;
        Randomizer::new()
            .run_with_rng(&repo, &repo, &mut latest, &mut PerkRng::new(4))
            .unwrap();

        let result = latest.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.all_items().count(), 8);
        assert!(result.is_disjoint());
    }
}
