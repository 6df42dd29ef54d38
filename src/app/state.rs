use ratatui::layout::Rect;
use std::time::Instant;
use uuid::Uuid;

use crate::model::config::AppConfig;
use crate::model::world::World;

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub world: World,
    pub config: AppConfig,
    /// Currently selected creature, if any. Ids stay stable for the whole
    /// run, so selection survives reordering.
    pub selected: Option<Uuid>,
    /// Where the world widget was drawn last frame, for mouse hit-tests.
    pub last_world_area: Rect,
    // FPS bookkeeping
    pub fps: f64,
    pub frame_count: u64,
    pub last_fps_update: Instant,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let world = World::new(config.clone());
        Self {
            running: true,
            paused: false,
            world,
            config,
            selected: None,
            last_world_area: Rect::default(),
            fps: 0.0,
            frame_count: 0,
            last_fps_update: Instant::now(),
        }
    }
}
