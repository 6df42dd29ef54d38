use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;

use crate::app::state::App;
use crate::model::food::Food;
use crate::model::input::ControlSignal;
use crate::ui::renderer::WorldWidget;

fn control_signal(code: KeyCode) -> Option<ControlSignal> {
    match code {
        KeyCode::Up => Some(ControlSignal::Up),
        KeyCode::Down => Some(ControlSignal::Down),
        KeyCode::Left => Some(ControlSignal::Left),
        KeyCode::Right => Some(ControlSignal::Right),
        KeyCode::Char('s') => Some(ControlSignal::Burst),
        KeyCode::Char('a') => Some(ControlSignal::RestToggle),
        _ => None,
    }
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.kind {
            // Repeats are ignored so held keys cannot re-fire the rest
            // toggle; the flags are already set from the initial press.
            KeyEventKind::Press => self.handle_key_press(key.code),
            KeyEventKind::Release => self.handle_key_release(key.code),
            KeyEventKind::Repeat => {}
        }
    }

    fn handle_key_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('f') => self.drop_food(),
            KeyCode::Esc => self.selected = None,
            _ => {
                if let Some(signal) = control_signal(code) {
                    self.world.press(signal);
                }
            }
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(signal) = control_signal(code) {
            self.world.release(signal);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some((wx, wy)) = WorldWidget::screen_to_world(
                mouse.column,
                mouse.row,
                self.last_world_area,
                self.config.world.width,
                self.config.world.height,
            ) {
                self.selected = self.world.creature_at(wx, wy).map(|c| c.id);
            }
        }
    }

    /// The frontend owns the food supply; the core only consumes it.
    fn drop_food(&mut self) {
        let mut rng = rand::thread_rng();
        let x = rng.gen_range(0.0..self.config.world.width);
        let y = rng.gen_range(0.0..self.config.world.height);
        self.world.add_food(Food::new(x, y));
    }
}
