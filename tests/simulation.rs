use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use aquarium::model::config::AppConfig;
use aquarium::model::creature::{Creature, Gender, Status};
use aquarium::model::food::Food;
use aquarium::model::input::ControlSignal;
use aquarium::model::vector::Vec2;
use aquarium::model::world::World;

const DT: f64 = 1.0 / 60.0;

fn world() -> World {
    World::new(AppConfig::default())
}

fn bounds(world: &World) -> (f64, f64) {
    (world.config.world.width, world.config.world.height)
}

/// A world with only the player fish, for tests that need exact motion
/// arithmetic without a wandering peer.
fn solo_world() -> World {
    let mut world = world();
    world.creatures.retain(|c| c.is_player_controlled);
    world
}

#[test]
fn test_simulation_lifecycle() {
    let mut world = world();
    let (w, h) = bounds(&world);

    for _ in 0..500 {
        world.update(w, h, DT);
    }

    assert_eq!(world.tick, 500);
    for creature in &world.creatures {
        let half_w = creature.width / 2.0;
        let half_h = creature.height / 2.0;
        assert!(
            creature.position.x >= half_w && creature.position.x <= w - half_w,
            "{} escaped horizontally: {:?}",
            creature.name,
            creature.position
        );
        assert!(
            creature.position.y >= half_h && creature.position.y <= h - half_h,
            "{} escaped vertically: {:?}",
            creature.name,
            creature.position
        );
        assert!(creature.health.current >= 0.0 && creature.health.current <= 100.0);
    }
}

#[test]
fn test_overlapping_creatures_separate() {
    let mut world = world();
    let (w, h) = bounds(&world);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    world.creatures.clear();
    for (x, name) in [(395.0, "left"), (415.0, "right")] {
        let mut creature =
            Creature::autonomous(x, 225.0, 60.0, 30.0, (128, 128, 128), name, Gender::Female, &mut rng);
        creature.velocity = Vec2::zero();
        world.creatures.push(creature);
    }

    let start = (world.creatures[0].position.x - world.creatures[1].position.x).abs();
    for _ in 0..50 {
        world.update(w, h, DT);
    }
    let end = (world.creatures[0].position.x - world.creatures[1].position.x).abs();

    assert!(
        end > start,
        "collision response should push overlapping creatures apart ({start} -> {end})"
    );
}

#[test]
fn test_autonomous_forager_reaches_food() {
    let mut world = world();
    let (w, h) = bounds(&world);

    world.add_food(Food::new(600.0, 300.0));

    let mut eaten_at = None;
    for tick in 0..2000 {
        world.update(w, h, DT);
        if world.food.is_empty() {
            eaten_at = Some(tick);
            break;
        }
    }

    assert!(
        eaten_at.is_some(),
        "the autonomous fish should forage its way to the pellet"
    );
    let total: u32 = world.creatures.iter().map(|c| c.food_eaten).sum();
    assert_eq!(total, 1);
}

#[test]
fn test_player_moves_under_input() {
    let mut world = solo_world();
    let (w, h) = bounds(&world);
    let start_x = world.creatures[0].position.x;

    world.press(ControlSignal::Right);
    for _ in 0..60 {
        world.update(w, h, DT);
    }

    let player = &world.creatures[0];
    assert!(player.position.x > start_x + 50.0);
    assert_eq!(player.status, Status::Awake);
    // One second of movement upkeep at 0.25/s.
    assert!((player.health.current - 49.75).abs() < 1e-6);
}

#[test]
fn test_burst_doubles_ground_covered_and_drains_health() {
    let mut plain = solo_world();
    let mut bursting = solo_world();
    let (w, h) = bounds(&plain);

    plain.press(ControlSignal::Right);
    bursting.press(ControlSignal::Right);
    bursting.press(ControlSignal::Burst);

    for _ in 0..60 {
        plain.update(w, h, DT);
        bursting.update(w, h, DT);
    }

    let covered_plain = plain.creatures[0].position.x - (plain.config.world.width / 2.0 - 150.0);
    let covered_burst =
        bursting.creatures[0].position.x - (bursting.config.world.width / 2.0 - 150.0);
    assert!((covered_burst - 2.0 * covered_plain).abs() < 1e-6);

    assert_eq!(bursting.creatures[0].status, Status::Speeding);
    // Burst cost 1.0/s on top of the 0.25/s movement upkeep.
    assert!((bursting.creatures[0].health.current - 48.75).abs() < 1e-6);
}

#[test]
fn test_resting_halts_and_regenerates() {
    let mut world = solo_world();
    let (w, h) = bounds(&world);

    world.creatures[0].health.current = 40.0;
    let start = world.creatures[0].position;

    world.press(ControlSignal::RestToggle);
    for _ in 0..60 {
        world.update(w, h, DT);
    }

    let player = &world.creatures[0];
    assert_eq!(player.status, Status::Resting);
    assert_eq!(player.velocity, Vec2::zero());
    assert_eq!(player.position, start);
    // One second of regen at 0.8/s below the 50-point threshold.
    assert!((player.health.current - 40.8).abs() < 1e-6);
}
