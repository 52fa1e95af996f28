//! Sampler and allocator bindings for Python.

use std::collections::HashMap;

use pyo3::prelude::*;

use crate::allocator::{self, Allocation};
use crate::core::{ItemId, PerkRng, PlayerRef, DEFAULT_PERKS_PER_PLAYER};
use crate::sampler;

fn rng_for(seed: Option<u64>) -> PerkRng {
    seed.map_or_else(PerkRng::from_entropy, PerkRng::new)
}

fn to_items(ids: Vec<String>) -> Vec<ItemId> {
    ids.into_iter().map(ItemId::from).collect()
}

fn to_players(ids: Vec<String>) -> Vec<PlayerRef> {
    ids.into_iter().map(PlayerRef::from).collect()
}

/// Python wrapper for Allocation.
#[pyclass(name = "Allocation")]
#[derive(Clone, Debug)]
pub struct PyAllocation(pub Allocation);

#[pymethods]
impl PyAllocation {
    /// Perks drawn for a player, or `None` if they did not take part.
    fn get(&self, player: &str) -> Option<Vec<String>> {
        self.0
            .get(&PlayerRef::new(player))
            .map(|hand| hand.iter().map(ToString::to_string).collect())
    }

    /// Players in processing order.
    fn players(&self) -> Vec<String> {
        self.0.players().map(ToString::to_string).collect()
    }

    /// (player, perks) pairs in processing order.
    fn items(&self) -> Vec<(String, Vec<String>)> {
        self.0
            .iter()
            .map(|(p, hand)| (p.to_string(), hand.iter().map(ToString::to_string).collect()))
            .collect()
    }

    /// Players with fewer than `target` perks.
    #[pyo3(signature = (target = DEFAULT_PERKS_PER_PLAYER))]
    fn shortfall(&self, target: usize) -> Vec<String> {
        self.0.shortfall(target).map(ToString::to_string).collect()
    }

    fn is_disjoint(&self) -> bool {
        self.0.is_disjoint()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("Allocation(players={})", self.0.len())
    }
}

/// Draw `min(k, len(items))` distinct items in random order.
#[pyfunction]
#[pyo3(signature = (k, items, seed = None))]
pub fn pick(k: i64, items: Vec<String>, seed: Option<u64>) -> Vec<String> {
    sampler::pick_signed(k, &items, &mut rng_for(seed))
}

/// Randomly permuted copy of `items`.
#[pyfunction]
#[pyo3(signature = (items, seed = None))]
pub fn shuffle(items: Vec<String>, seed: Option<u64>) -> Vec<String> {
    sampler::shuffle(&items, &mut rng_for(seed))
}

/// Greedy per-player allocation. Players missing from `pools` get nothing.
#[pyfunction]
#[pyo3(
    signature = (players, pools, avoid_overlap = false, k = DEFAULT_PERKS_PER_PLAYER, seed = None)
)]
pub fn allocate(
    players: Vec<String>,
    pools: HashMap<String, Vec<String>>,
    avoid_overlap: bool,
    k: usize,
    seed: Option<u64>,
) -> PyAllocation {
    let source = |p: &PlayerRef| pools.get(p.as_str()).cloned().map(to_items).unwrap_or_default();
    PyAllocation(allocator::allocate(
        &to_players(players),
        &source,
        avoid_overlap,
        k,
        &mut rng_for(seed),
    ))
}

/// One shared draw split into blocks of `k`.
#[pyfunction]
#[pyo3(signature = (players, pool, k = DEFAULT_PERKS_PER_PLAYER, seed = None))]
pub fn allocate_pooled(
    players: Vec<String>,
    pool: Vec<String>,
    k: usize,
    seed: Option<u64>,
) -> PyAllocation {
    PyAllocation(allocator::allocate_pooled(
        &to_players(players),
        &to_items(pool),
        k,
        &mut rng_for(seed),
    ))
}
