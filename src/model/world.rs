use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::model::config::AppConfig;
use crate::model::creature::{Creature, Gender};
use crate::model::food::Food;
use crate::model::input::{ControlSignal, InputState};

/// The simulation aggregate: an ordered creature list, the outstanding food
/// set, and the tick driver.
///
/// A tick is atomic from the outside; the loop may stop between ticks with
/// no cleanup. World bounds are supplied per tick by the host rather than
/// owned here. The RNG is seeded so a run is reproducible under a fixed
/// seed and scripted input.
pub struct World {
    pub tick: u64,
    pub creatures: Vec<Creature>,
    pub food: Vec<Food>,
    pub config: AppConfig,
    pub rng: ChaCha8Rng,
}

impl World {
    /// Builds the starting tank: one player-controlled fish and one
    /// autonomous fish either side of the centre.
    pub fn new(config: AppConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.world.seed);
        let cx = config.world.width / 2.0;
        let cy = config.world.height / 2.0;

        let creatures = vec![
            Creature::player(
                cx - 150.0,
                cy,
                60.0,
                30.0,
                (0, 0, 255),
                "Xiao",
                Gender::Male,
                &mut rng,
            ),
            Creature::autonomous(
                cx + 150.0,
                cy,
                60.0,
                30.0,
                (255, 0, 0),
                "Yu",
                Gender::Male,
                &mut rng,
            ),
        ];

        Self {
            tick: 0,
            creatures,
            food: Vec::new(),
            config,
            rng,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Every creature updates against a read-only snapshot of its peers
    /// taken at the start of the pass; food pruning happens strictly after
    /// all updates, and the first claimant in creature order wins.
    pub fn update(&mut self, bounds_width: f64, bounds_height: f64, elapsed_secs: f64) {
        self.tick += 1;

        if !self.food.is_empty() {
            for creature in &mut self.creatures {
                if !creature.is_player_controlled {
                    creature.move_towards_food(&self.food);
                }
            }
        }

        let snapshots: Vec<_> = self.creatures.iter().map(Creature::snapshot).collect();
        for creature in &mut self.creatures {
            creature.update(
                bounds_width,
                bounds_height,
                &snapshots,
                elapsed_secs,
                &self.config.metabolism,
                &mut self.rng,
            );
        }

        let creatures = &mut self.creatures;
        let before = self.food.len();
        self.food
            .retain(|item| !creatures.iter_mut().any(|c| c.is_near_food(item)));

        let eaten = before - self.food.len();
        if eaten > 0 {
            tracing::debug!(
                tick = self.tick,
                eaten,
                remaining = self.food.len(),
                "food consumed"
            );
        }
    }

    pub fn add_food(&mut self, food: Food) {
        tracing::debug!(x = food.position.x, y = food.position.y, "food added");
        self.food.push(food);
    }

    /// Selection hit-test: the topmost creature whose half-width circle
    /// covers the given point.
    pub fn creature_at(&self, x: f64, y: f64) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.contains_point(x, y))
    }

    pub fn player_input_mut(&mut self) -> Option<&mut InputState> {
        self.creatures
            .iter_mut()
            .find(|c| c.is_player_controlled)
            .and_then(|c| c.input.as_mut())
    }

    pub fn press(&mut self, signal: ControlSignal) {
        if let Some(input) = self.player_input_mut() {
            input.press(signal);
        }
    }

    pub fn release(&mut self, signal: ControlSignal) {
        if let Some(input) = self.player_input_mut() {
            input.release(signal);
        }
    }
}
