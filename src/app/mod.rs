pub mod input;
pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::{Duration, Instant};

use crate::ui::Tui;

impl App {
    /// Drives the frame loop: draw, drain input events, then advance the
    /// world once the tick interval has elapsed. Single-threaded: a tick
    /// always runs to completion before the next input read.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_millis(1000 / self.config.target_fps.max(1));

        while self.running {
            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            self.frame_count += 1;
            if self.last_fps_update.elapsed() >= Duration::from_secs(1) {
                self.fps = self.frame_count as f64;
                self.frame_count = 0;
                self.last_fps_update = Instant::now();
            }

            // 1ms poll keeps input responsive without busy-waiting.
            while event::poll(Duration::from_millis(1))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if !self.paused {
                    let elapsed_secs = last_tick.elapsed().as_secs_f64();
                    self.world.update(
                        self.config.world.width,
                        self.config.world.height,
                        elapsed_secs,
                    );
                }
                last_tick = Instant::now();
            }
        }

        tracing::info!(tick = self.world.tick, "exiting main loop");
        Ok(())
    }
}
