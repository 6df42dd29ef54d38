use serde::{Deserialize, Serialize};

/// A two-dimensional vector with mutate-in-place arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn add(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }

    pub fn scale(&mut self, n: f64) {
        self.x *= n;
        self.y *= n;
    }

    /// Rescales to exactly `max` when the magnitude exceeds it.
    pub fn limit(&mut self, max: f64) {
        let mag = self.magnitude();
        if mag > max {
            self.x = (self.x / mag) * max;
            self.y = (self.y / mag) * max;
        }
    }

    /// Rescales to unit length. The zero vector has no direction and is
    /// left unchanged rather than producing NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            self.x /= mag;
            self.y /= mag;
        }
        self
    }
}
