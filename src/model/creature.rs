use std::f64::consts::PI;

use rand::Rng;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::config::MetabolismConfig;
use crate::model::error::ModelError;
use crate::model::food::Food;
use crate::model::health::Health;
use crate::model::input::InputState;
use crate::model::vector::Vec2;

/// Distance from an edge at which boundary repulsion starts.
pub const BOUNDARY_THRESHOLD: f64 = 50.0;
/// Blending rate for the smooth turn toward a steering target.
const STEERING_RATE: f64 = 0.05;
/// Random variation applied to the steering target angle, in radians.
const STEERING_JITTER: f64 = 0.1;
/// Scales the push-apart impulse when two creatures overlap.
const COLLISION_DAMPING: f64 = 0.05;
/// Acceleration step applied when foraging toward the nearest food.
const FORAGE_STEP: f64 = 0.1;
/// Health gained per food pellet eaten.
const FOOD_HEALTH_VALUE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Idle,
    Awake,
    Resting,
    Speeding,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Idle => "Idle",
            Status::Awake => "Awake",
            Status::Resting => "Resting",
            Status::Speeding => "Speeding!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Read-only view of a creature taken before the update pass, so collision
/// checks never observe a sibling's mid-tick mutations.
#[derive(Debug, Clone, Copy)]
pub struct CreatureSnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub id: Uuid,
    pub name: String,
    pub gender: Gender,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in radians.
    pub orientation: f64,
    pub width: f64,
    pub height: f64,
    pub max_speed: f64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub is_player_controlled: bool,
    pub health: Health,
    pub food_eaten: u32,
    pub status: Status,
    pub input: Option<InputState>,
}

impl Creature {
    /// Creates a creature, validating that an input channel is present
    /// exactly when the creature is player-controlled.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: (u8, u8, u8),
        name: impl Into<String>,
        gender: Gender,
        input: Option<InputState>,
        is_player_controlled: bool,
        rng: &mut impl Rng,
    ) -> Result<Self, ModelError> {
        if is_player_controlled != input.is_some() {
            return Err(ModelError::PreconditionFailed(
                "player-controlled creatures require an input state, autonomous ones must not have one",
            ));
        }
        Ok(Self::assemble(
            x,
            y,
            width,
            height,
            color,
            name,
            gender,
            input,
            is_player_controlled,
            rng,
        ))
    }

    pub fn player(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: (u8, u8, u8),
        name: impl Into<String>,
        gender: Gender,
        rng: &mut impl Rng,
    ) -> Self {
        Self::assemble(
            x,
            y,
            width,
            height,
            color,
            name,
            gender,
            Some(InputState::default()),
            true,
            rng,
        )
    }

    pub fn autonomous(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: (u8, u8, u8),
        name: impl Into<String>,
        gender: Gender,
        rng: &mut impl Rng,
    ) -> Self {
        Self::assemble(x, y, width, height, color, name, gender, None, false, rng)
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        (r, g, b): (u8, u8, u8),
        name: impl Into<String>,
        gender: Gender,
        input: Option<InputState>,
        is_player_controlled: bool,
        rng: &mut impl Rng,
    ) -> Self {
        // Start drifting in a random direction at twice cruising speed; the
        // boundary steering settles it down within a few ticks.
        let mut velocity = Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        velocity.normalize();
        velocity.scale(2.0);
        let orientation = velocity.y.atan2(velocity.x);

        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            gender,
            position: Vec2::new(x, y),
            velocity,
            orientation,
            width,
            height,
            max_speed: 1.0,
            r,
            g,
            b,
            is_player_controlled,
            health: Health::new(50.0),
            food_eaten: 0,
            status: Status::Idle,
            input,
        }
    }

    pub fn color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Advances the creature by one tick: control, integration, boundary
    /// steering, then peer collision, in that order.
    pub fn update(
        &mut self,
        bounds_width: f64,
        bounds_height: f64,
        peers: &[CreatureSnapshot],
        elapsed_secs: f64,
        metabolism: &MetabolismConfig,
        rng: &mut impl Rng,
    ) {
        if self.is_player_controlled {
            self.apply_control(elapsed_secs, metabolism);
        }

        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;

        self.avoid_boundaries(bounds_width, bounds_height, rng);
        self.collide_with_peers(peers);
    }

    pub fn snapshot(&self) -> CreatureSnapshot {
        CreatureSnapshot {
            id: self.id,
            x: self.position.x,
            y: self.position.y,
            width: self.width,
        }
    }

    fn apply_control(&mut self, elapsed_secs: f64, metabolism: &MetabolismConfig) {
        let Some(input) = &self.input else {
            return;
        };
        let intent = input.movement_vector();

        if intent.resting {
            self.status = Status::Resting;
            self.velocity = Vec2::zero();
            // Passive regen is gated by the threshold, not by max health.
            if self.health.current <= metabolism.rest_regen_threshold {
                self.health.increase(metabolism.rest_regen_rate * elapsed_secs);
            }
        } else {
            self.status = Status::Awake;
            if intent.dx != 0.0 || intent.dy != 0.0 {
                self.velocity = Vec2::new(intent.dx, intent.dy);
                self.orientation = self.velocity.y.atan2(self.velocity.x);

                if intent.burst {
                    self.status = Status::Speeding;
                    self.velocity.scale(2.0);
                    self.health.decrease(metabolism.burst_cost * elapsed_secs);
                }

                // Movement upkeep applies whether or not the burst is on.
                if elapsed_secs > 0.0 {
                    self.health.decrease(metabolism.move_cost * elapsed_secs);
                }
            } else {
                self.velocity = Vec2::zero();
                self.health.decrease(metabolism.idle_cost * elapsed_secs);
            }
        }
    }

    /// Steers away from any edge closer than [`BOUNDARY_THRESHOLD`] with a
    /// linear ramp (full strength at the edge, zero at the threshold), then
    /// clamps the position so the half-extent stays inside the bounds.
    fn avoid_boundaries(&mut self, bounds_width: f64, bounds_height: f64, rng: &mut impl Rng) {
        let mut delta_x = 0.0;
        let mut delta_y = 0.0;
        let mut adjustment_needed = false;

        if self.position.x < BOUNDARY_THRESHOLD {
            delta_x = (BOUNDARY_THRESHOLD - self.position.x) / BOUNDARY_THRESHOLD;
            adjustment_needed = true;
        } else if self.position.x > bounds_width - BOUNDARY_THRESHOLD {
            delta_x = -(BOUNDARY_THRESHOLD - (bounds_width - self.position.x)) / BOUNDARY_THRESHOLD;
            adjustment_needed = true;
        }

        if self.position.y < BOUNDARY_THRESHOLD {
            delta_y = (BOUNDARY_THRESHOLD - self.position.y) / BOUNDARY_THRESHOLD;
            adjustment_needed = true;
        } else if self.position.y > bounds_height - BOUNDARY_THRESHOLD {
            delta_y =
                -(BOUNDARY_THRESHOLD - (bounds_height - self.position.y)) / BOUNDARY_THRESHOLD;
            adjustment_needed = true;
        }

        if adjustment_needed {
            let target_angle =
                delta_y.atan2(delta_x) + rng.gen_range(-STEERING_JITTER..STEERING_JITTER);
            self.orientation = blend_angle(self.orientation, target_angle, STEERING_RATE);
            self.velocity.x = self.orientation.cos() * self.max_speed;
            self.velocity.y = self.orientation.sin() * self.max_speed;
        }

        self.position.x = self
            .position
            .x
            .min(bounds_width - self.width / 2.0)
            .max(self.width / 2.0);
        self.position.y = self
            .position
            .y
            .min(bounds_height - self.height / 2.0)
            .max(self.height / 2.0);
    }

    /// Pushes away from every overlapping peer along the opposite of the
    /// approach angle, proportional to overlap depth.
    fn collide_with_peers(&mut self, peers: &[CreatureSnapshot]) {
        for peer in peers {
            if peer.id == self.id {
                continue;
            }
            let dx = self.position.x - peer.x;
            let dy = self.position.y - peer.y;
            let distance = (dx * dx + dy * dy).sqrt();
            let min_distance = (self.width + peer.width) / 2.0;

            if distance < min_distance {
                let overlap = min_distance - distance;
                let avoidance_angle = dy.atan2(dx) + PI;

                self.velocity.x -= COLLISION_DAMPING * avoidance_angle.cos() * overlap;
                self.velocity.y -= COLLISION_DAMPING * avoidance_angle.sin() * overlap;
                self.velocity.limit(self.max_speed);

                self.orientation = self.velocity.y.atan2(self.velocity.x);
            }
        }
    }

    /// Proximity check that consumes: when the food is within reach the
    /// creature eats it as a side effect and the caller must prune the item.
    /// Never call this for inspection only.
    pub fn is_near_food(&mut self, food: &Food) -> bool {
        let dx = self.position.x - food.position.x;
        let dy = self.position.y - food.position.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let reach = self.width / 2.0 + food.radius;

        if distance < reach {
            self.eat();
            true
        } else {
            false
        }
    }

    fn eat(&mut self) {
        self.food_eaten += 1;
        self.health.increase(FOOD_HEALTH_VALUE);
    }

    /// Accelerates toward the nearest food item. Ties on distance go to the
    /// first item in iteration order.
    pub fn move_towards_food(&mut self, food_items: &[Food]) {
        let Some(closest) = food_items.iter().min_by(|a, b| {
            let da = self.distance_to(a.position);
            let db = self.distance_to(b.position);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        }) else {
            return;
        };

        let angle_to_food = (closest.position.y - self.position.y)
            .atan2(closest.position.x - self.position.x);
        self.velocity.x += FORAGE_STEP * angle_to_food.cos();
        self.velocity.y += FORAGE_STEP * angle_to_food.sin();
        self.velocity.limit(self.max_speed);

        self.orientation = self.velocity.y.atan2(self.velocity.x);
    }

    /// Pointer hit-test used by the selection interface.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.distance_to(Vec2::new(x, y)) <= self.width / 2.0
    }

    fn distance_to(&self, point: Vec2) -> f64 {
        let dx = self.position.x - point.x;
        let dy = self.position.y - point.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Rotates `current` toward `target` by `rate` along the shortest angular
/// path, wrapping the difference into (-PI, PI].
fn blend_angle(current: f64, target: f64, rate: f64) -> f64 {
    let mut difference = target - current;
    while difference > PI {
        difference -= 2.0 * PI;
    }
    while difference < -PI {
        difference += 2.0 * PI;
    }
    current + difference * rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::MetabolismConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn metabolism() -> MetabolismConfig {
        MetabolismConfig::default()
    }

    fn player_at(x: f64, y: f64) -> Creature {
        Creature::player(x, y, 60.0, 30.0, (0, 0, 255), "Xiao", Gender::Male, &mut rng())
    }

    fn drifter_at(x: f64, y: f64) -> Creature {
        Creature::autonomous(x, y, 60.0, 30.0, (255, 0, 0), "Yu", Gender::Male, &mut rng())
    }

    #[test]
    fn test_new_rejects_player_without_input() {
        let result = Creature::new(
            0.0,
            0.0,
            60.0,
            30.0,
            (0, 0, 255),
            "Xiao",
            Gender::Male,
            None,
            true,
            &mut rng(),
        );
        assert!(matches!(result, Err(ModelError::PreconditionFailed(_))));
    }

    #[test]
    fn test_new_rejects_input_on_autonomous() {
        let result = Creature::new(
            0.0,
            0.0,
            60.0,
            30.0,
            (255, 0, 0),
            "Yu",
            Gender::Male,
            Some(InputState::default()),
            false,
            &mut rng(),
        );
        assert!(matches!(result, Err(ModelError::PreconditionFailed(_))));
    }

    #[test]
    fn test_resting_forces_zero_velocity() {
        let mut creature = player_at(400.0, 225.0);
        creature.velocity = Vec2::new(1.0, -1.0);
        if let Some(input) = creature.input.as_mut() {
            input.press(crate::model::input::ControlSignal::RestToggle);
        }

        creature.apply_control(0.1, &metabolism());

        assert_eq!(creature.velocity, Vec2::zero());
        assert_eq!(creature.status, Status::Resting);
    }

    #[test]
    fn test_resting_regen_gated_by_threshold() {
        let mut creature = player_at(400.0, 225.0);
        if let Some(input) = creature.input.as_mut() {
            input.press(crate::model::input::ControlSignal::RestToggle);
        }

        creature.health.current = 50.0;
        creature.apply_control(1.0, &metabolism());
        assert!((creature.health.current - 50.8).abs() < 1e-9);

        // Above the threshold there is no regen even though max is 100.
        creature.health.current = 51.0;
        creature.apply_control(1.0, &metabolism());
        assert_eq!(creature.health.current, 51.0);
    }

    #[test]
    fn test_burst_doubles_velocity_and_costs_health() {
        let mut creature = player_at(400.0, 225.0);
        if let Some(input) = creature.input.as_mut() {
            input.press(crate::model::input::ControlSignal::Right);
            input.press(crate::model::input::ControlSignal::Burst);
        }

        creature.apply_control(1.0, &metabolism());

        assert_eq!(creature.status, Status::Speeding);
        assert_eq!(creature.velocity, Vec2::new(2.0, 0.0));
        // 1.0 burst cost + 0.25 movement upkeep
        assert!((creature.health.current - 48.75).abs() < 1e-9);
    }

    #[test]
    fn test_idle_player_pays_upkeep_only() {
        let mut creature = player_at(400.0, 225.0);
        creature.velocity = Vec2::new(0.5, 0.5);

        creature.apply_control(1.0, &metabolism());

        assert_eq!(creature.velocity, Vec2::zero());
        assert_eq!(creature.status, Status::Awake);
        assert!((creature.health.current - 49.99).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_steering_pushes_inward_and_clamps() {
        let mut creature = drifter_at(10.0, 225.0);
        let mut rng = rng();

        creature.update(800.0, 450.0, &[], 0.016, &metabolism(), &mut rng);
        assert!(creature.position.x >= creature.width / 2.0);

        // The steering rate is 0.05 per tick, so give it time to turn.
        for _ in 0..200 {
            creature.update(800.0, 450.0, &[], 0.016, &metabolism(), &mut rng);
        }
        assert!(
            creature.velocity.x > 0.0,
            "left-edge repulsion should end up pointing rightward, got {:?}",
            creature.velocity
        );
    }

    #[test]
    fn test_peer_collision_pushes_apart() {
        let mut creature = drifter_at(300.0, 225.0);
        creature.velocity = Vec2::zero();
        let peer = CreatureSnapshot {
            id: Uuid::new_v4(),
            x: 310.0,
            y: 225.0,
            width: 60.0,
        };

        creature.collide_with_peers(&[peer]);

        assert!(
            creature.velocity.x < 0.0,
            "creature left of peer must be pushed further left"
        );
        assert!(creature.velocity.magnitude() <= creature.max_speed + 1e-9);
        assert!((creature.orientation - PI).abs() < 1e-6);
    }

    #[test]
    fn test_collision_ignores_own_snapshot() {
        let mut creature = drifter_at(300.0, 225.0);
        creature.velocity = Vec2::zero();
        let own = creature.snapshot();

        creature.collide_with_peers(&[own]);

        assert_eq!(creature.velocity, Vec2::zero());
    }

    #[test]
    fn test_is_near_food_eats_once_per_call() {
        let mut creature = drifter_at(0.0, 0.0);
        let food = Food::new(25.0, 0.0);

        // distance 25 < 60/2 + 5
        assert!(creature.is_near_food(&food));
        assert_eq!(creature.food_eaten, 1);
        assert!((creature.health.current - 51.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_near_food_out_of_reach() {
        let mut creature = drifter_at(0.0, 0.0);
        let food = Food::new(40.0, 0.0);

        assert!(!creature.is_near_food(&food));
        assert_eq!(creature.food_eaten, 0);
    }

    #[test]
    fn test_move_towards_food_picks_nearest() {
        let mut creature = drifter_at(100.0, 100.0);
        creature.velocity = Vec2::zero();
        let far = Food::new(500.0, 100.0);
        let near = Food::new(150.0, 100.0);

        creature.move_towards_food(&[far, near]);

        assert!(creature.velocity.x > 0.0);
        assert!((creature.velocity.y).abs() < 1e-9);
        assert!((creature.orientation).abs() < 1e-9);
    }

    #[test]
    fn test_contains_point_uses_half_width() {
        let creature = drifter_at(100.0, 100.0);
        assert!(creature.contains_point(129.0, 100.0));
        assert!(!creature.contains_point(131.0, 100.0));
    }

    #[test]
    fn test_blend_angle_takes_shortest_path() {
        // From just below +PI toward just above -PI the short way crosses the
        // wrap, so the blended angle must move upward, not sweep through 0.
        let blended = blend_angle(3.0, -3.0, 0.05);
        assert!(blended > 3.0);

        let direct = blend_angle(0.0, 1.0, 0.05);
        assert!((direct - 0.05).abs() < 1e-12);
    }
}
