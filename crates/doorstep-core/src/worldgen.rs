//! Procedural world generation.
//!
//! Builds the neighborhood/location/NPC tree from configured bounds.
//! Categories are uniform, population per location is uniform in
//! `0..=max_npcs`, and zero-resident locations are legal.

use rand::Rng;
use tracing::info;

use doorstep_types::{Location, LocationCategory, Neighborhood, World};

use crate::config::WorldGenConfig;
use crate::npc::spawn_npc;

/// Generate a world according to the configured bounds.
pub fn generate_world(config: &WorldGenConfig, rng: &mut impl Rng) -> World {
    let neighborhoods = (0..config.neighborhood_count)
        .map(|_| generate_neighborhood(config, rng))
        .collect();
    let world = World { neighborhoods };
    info!(
        neighborhoods = world.neighborhoods.len(),
        locations = world
            .neighborhoods
            .iter()
            .map(|n| n.locations.len())
            .sum::<usize>(),
        "generated world"
    );
    world
}

fn generate_neighborhood(config: &WorldGenConfig, rng: &mut impl Rng) -> Neighborhood {
    // Misconfigured bounds collapse to a single-point range rather than
    // panicking inside the RNG.
    let min = config.min_locations.min(config.max_locations);
    let count = rng.random_range(min..=config.max_locations);
    Neighborhood {
        locations: (0..count).map(|_| generate_location(config, rng)).collect(),
    }
}

fn generate_location(config: &WorldGenConfig, rng: &mut impl Rng) -> Location {
    let category = sample_category(rng);
    let population = rng.random_range(0..=config.max_npcs);
    Location {
        category,
        npcs: (0..population).map(|_| spawn_npc(category, rng)).collect(),
        is_church: false,
        church_religion: None,
    }
}

fn sample_category(rng: &mut impl Rng) -> LocationCategory {
    let roll = rng.random_range(0..LocationCategory::ALL.len());
    LocationCategory::ALL
        .get(roll)
        .copied()
        .unwrap_or(LocationCategory::House)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn respects_configured_bounds() {
        let mut rng = SmallRng::seed_from_u64(8);
        let config = WorldGenConfig {
            neighborhood_count: 3,
            min_locations: 2,
            max_locations: 5,
            max_npcs: 4,
        };
        let world = generate_world(&config, &mut rng);
        assert_eq!(world.neighborhoods.len(), 3);
        for neighborhood in &world.neighborhoods {
            assert!((2..=5).contains(&neighborhood.locations.len()));
            for location in &neighborhood.locations {
                assert!(location.npcs.len() <= 4);
                assert!(!location.is_church);
            }
        }
    }

    #[test]
    fn inverted_bounds_do_not_panic() {
        let mut rng = SmallRng::seed_from_u64(8);
        let config = WorldGenConfig {
            neighborhood_count: 1,
            min_locations: 9,
            max_locations: 3,
            max_npcs: 1,
        };
        let world = generate_world(&config, &mut rng);
        let total: usize = world.neighborhoods.iter().map(|n| n.locations.len()).sum();
        assert!(total <= 3);
    }

    #[test]
    fn zero_npc_locations_occur() {
        let mut rng = SmallRng::seed_from_u64(17);
        let config = WorldGenConfig {
            neighborhood_count: 10,
            min_locations: 5,
            max_locations: 10,
            max_npcs: 2,
        };
        let world = generate_world(&config, &mut rng);
        let empty = world
            .neighborhoods
            .iter()
            .flat_map(|n| &n.locations)
            .filter(|l| l.npcs.is_empty())
            .count();
        assert!(empty > 0);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let config = WorldGenConfig::default();
        let mut a = SmallRng::seed_from_u64(123);
        let mut b = SmallRng::seed_from_u64(123);
        let world_a = generate_world(&config, &mut a);
        let world_b = generate_world(&config, &mut b);
        assert_eq!(world_a, world_b);
    }
}
