use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::model::vector::Vec2;

/// A food pellet. Spawned by the frontend and removed by the world once a
/// creature's proximity check consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub position: Vec2,
    pub radius: f64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Food {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            radius: 5.0,
            r: 255,
            g: 165,
            b: 0,
        }
    }

    pub fn color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}
