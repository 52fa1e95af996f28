//! Allocator properties and reference scenarios.

use proptest::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use perk_randomizer::allocator::{allocate, allocate_pooled, AllocationStrategy, PooledBlocks};
use perk_randomizer::core::{ItemId, PerkRng, PlayerRef};

fn items(prefix: &str, n: usize) -> Vec<ItemId> {
    (1..=n).map(|i| ItemId::new(format!("{prefix}{i}"))).collect()
}

fn players(ids: &[&str]) -> Vec<PlayerRef> {
    ids.iter().map(|&s| PlayerRef::new(s)).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_independent_mode_single_player() {
    let roster = players(&["A"]);
    let pool = items("p", 10);
    let source = |_: &PlayerRef| pool.clone();
    let result = allocate(&roster, &source, false, 4, &mut PerkRng::from_entropy());

    let hand = result.get(&roster[0]).unwrap();
    assert_eq!(hand.len(), 4);
    assert!(hand.iter().all(|i| pool.contains(i)));
    let unique: FxHashSet<_> = hand.iter().collect();
    assert_eq!(unique.len(), 4);
}

#[test]
fn test_empty_roster() {
    let source = |_: &PlayerRef| items("p", 3);
    let result = allocate(&[], &source, true, 4, &mut PerkRng::from_entropy());
    assert!(result.is_empty());
    assert_eq!(result.iter().count(), 0);
}

#[test]
fn test_empty_pool() {
    let roster = players(&["A"]);
    let source = |_: &PlayerRef| Vec::<ItemId>::new();
    let result = allocate(&roster, &source, true, 4, &mut PerkRng::from_entropy());
    assert_eq!(result.get(&roster[0]).map(<[ItemId]>::len), Some(0));
}

#[test]
fn test_starvation_with_shared_pool() {
    let roster = players(&["A", "B"]);
    let pool = items("", 3);

    for seed in 0..20 {
        let source = |_: &PlayerRef| pool.clone();
        let result = allocate(&roster, &source, true, 4, &mut PerkRng::new(seed));
        assert_eq!(result.get(&roster[0]).unwrap().len(), 3);
        assert_eq!(result.get(&roster[1]).unwrap().len(), 0);

        let short: Vec<_> = result.shortfall(4).collect();
        assert_eq!(short, vec![&roster[0], &roster[1]]);
    }
}

#[test]
fn test_earlier_players_have_precedence() {
    // A and B share six perks; A always gets a full hand, B gets the rest.
    let roster = players(&["A", "B"]);
    let pool = items("s", 6);

    for seed in 0..20 {
        let source = |_: &PlayerRef| pool.clone();
        let result = allocate(&roster, &source, true, 4, &mut PerkRng::new(seed));
        assert_eq!(result.get(&roster[0]).unwrap().len(), 4);
        assert_eq!(result.get(&roster[1]).unwrap().len(), 2);
        assert!(result.is_disjoint());
    }

    // Reversing the order reverses who is starved.
    let reversed = players(&["B", "A"]);
    let result = allocate(&reversed, &|_: &PlayerRef| pool.clone(), true, 4, &mut PerkRng::new(1));
    assert_eq!(result.get(&PlayerRef::new("B")).unwrap().len(), 4);
    assert_eq!(result.get(&PlayerRef::new("A")).unwrap().len(), 2);
}

#[test]
fn test_exclusion_only_removes_drawn_items() {
    // B's private perks are untouched by A's draw.
    let mut pools: FxHashMap<PlayerRef, Vec<ItemId>> = FxHashMap::default();
    pools.insert(PlayerRef::new("A"), items("shared", 4));
    let mut b_pool = items("shared", 4);
    b_pool.extend(items("b", 3));
    pools.insert(PlayerRef::new("B"), b_pool);
    let source = |p: &PlayerRef| pools.get(p).cloned().unwrap_or_default();

    let roster = players(&["A", "B"]);
    let result = allocate(&roster, &source, true, 4, &mut PerkRng::new(8));

    let b = result.get(&roster[1]).unwrap();
    assert_eq!(b.len(), 3);
    assert!(b.iter().all(|i| i.as_str().starts_with('b')));
}

#[test]
fn test_result_order_follows_players() {
    let roster = players(&["C", "A", "B"]);
    let result = allocate(&roster, &|_: &PlayerRef| items("p", 20), true, 4, &mut PerkRng::new(2));

    let order: Vec<_> = result.players().cloned().collect();
    assert_eq!(order, roster);
}

#[test]
fn test_pooled_strategy_via_trait() {
    let roster = players(&["A", "B", "C"]);
    let pool = items("p", 12);
    let source = |_: &PlayerRef| pool.clone();
    let result = PooledBlocks::new(4).allocate(&roster, &source, &mut PerkRng::new(6));

    assert!(result.is_disjoint());
    assert_eq!(result.all_items().count(), 12);
}

// =============================================================================
// Properties
// =============================================================================

fn pools_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    // Up to 6 players, each eligible for a subset of 0..15.
    prop::collection::vec(prop::collection::btree_set(0usize..15, 0..10), 0..6)
        .prop_map(|sets| sets.into_iter().map(|s| s.into_iter().collect()).collect())
}

fn to_source(pools: &[Vec<usize>]) -> (Vec<PlayerRef>, FxHashMap<PlayerRef, Vec<ItemId>>) {
    let roster: Vec<PlayerRef> = (0..pools.len()).map(|i| PlayerRef::numbered(i as u32)).collect();
    let map = roster
        .iter()
        .zip(pools)
        .map(|(p, pool)| (p.clone(), pool.iter().map(|i| ItemId::new(i.to_string())).collect()))
        .collect();
    (roster, map)
}

proptest! {
    #[test]
    fn prop_avoid_overlap_is_disjoint(
        pools in pools_strategy(),
        k in 1usize..6,
        seed in any::<u64>(),
    ) {
        let (roster, map) = to_source(&pools);
        let source = |p: &PlayerRef| map.get(p).cloned().unwrap_or_default();

        let result = allocate(&roster, &source, true, k, &mut PerkRng::new(seed));

        prop_assert!(result.is_disjoint());
        prop_assert_eq!(result.len(), roster.len());
        for player in &roster {
            let hand = result.get(player).unwrap();
            prop_assert!(hand.len() <= k);
            prop_assert!(hand.iter().all(|i| map[player].contains(i)));
        }
    }

    #[test]
    fn prop_independent_mode_draws_from_own_pool(
        pools in pools_strategy(),
        k in 1usize..6,
        seed in any::<u64>(),
    ) {
        let (roster, map) = to_source(&pools);
        let source = |p: &PlayerRef| map.get(p).cloned().unwrap_or_default();

        let result = allocate(&roster, &source, false, k, &mut PerkRng::new(seed));

        for player in &roster {
            let hand = result.get(player).unwrap();
            let pool = &map[player];
            // Other players never shrink this player's hand.
            prop_assert_eq!(hand.len(), k.min(pool.len()));
            prop_assert!(hand.iter().all(|i| pool.contains(i)));
            let unique: FxHashSet<_> = hand.iter().collect();
            prop_assert_eq!(unique.len(), hand.len());
        }
    }

    #[test]
    fn prop_independent_mode_ignores_other_players(
        pools in pools_strategy(),
        k in 1usize..6,
        seed in any::<u64>(),
    ) {
        prop_assume!(pools.len() >= 2);
        let (roster, map) = to_source(&pools);
        let source = |p: &PlayerRef| map.get(p).cloned().unwrap_or_default();

        let full = allocate(&roster, &source, false, k, &mut PerkRng::new(seed));
        let alone = allocate(&roster[..1], &source, false, k, &mut PerkRng::new(seed));

        // Same seed, first player: removing later players changes nothing.
        prop_assert_eq!(full.get(&roster[0]), alone.get(&roster[0]));
    }

    #[test]
    fn prop_pooled_is_disjoint_and_blocked(
        n_players in 0usize..6,
        pool_size in 0usize..30,
        k in 0usize..6,
        seed in any::<u64>(),
    ) {
        let roster: Vec<PlayerRef> =
            (0..n_players).map(|i| PlayerRef::numbered(i as u32)).collect();
        let pool = items("p", pool_size);

        let result = allocate_pooled(&roster, &pool, k, &mut PerkRng::new(seed));

        prop_assert!(result.is_disjoint());
        prop_assert_eq!(result.all_items().count(), (k * n_players).min(pool_size));
        // Hands only shrink along the roster.
        let sizes: Vec<_> = roster.iter().map(|p| result.get(p).unwrap().len()).collect();
        prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
    }
}
