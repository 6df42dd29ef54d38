use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};
use std::f64::consts::{FRAC_PI_4, PI};
use uuid::Uuid;

use crate::model::creature::Status;
use crate::model::world::World;

/// Renders the tank: food pellets, creatures as heading glyphs, and status
/// labels over resting/speeding fish.
pub struct WorldWidget<'a> {
    world: &'a World,
    selected: Option<Uuid>,
}

impl<'a> WorldWidget<'a> {
    pub fn new(world: &'a World, selected: Option<Uuid>) -> Self {
        Self { world, selected }
    }

    pub fn inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Maps world coordinates into the bordered cell grid.
    pub fn world_to_screen(
        world_x: f64,
        world_y: f64,
        area: Rect,
        world_width: f64,
        world_height: f64,
    ) -> Option<(u16, u16)> {
        let inner = Self::inner_area(area);
        if inner.width == 0 || inner.height == 0 || world_width <= 0.0 || world_height <= 0.0 {
            return None;
        }
        let x = inner.x as f64 + (world_x / world_width) * inner.width as f64;
        let y = inner.y as f64 + (world_y / world_height) * inner.height as f64;
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (x, y) = (x as u16, y as u16);
        if x >= inner.left() && x < inner.right() && y >= inner.top() && y < inner.bottom() {
            Some((x, y))
        } else {
            None
        }
    }

    /// Maps a cell (e.g. a mouse click) back to world coordinates, using
    /// the cell centre.
    pub fn screen_to_world(
        screen_x: u16,
        screen_y: u16,
        area: Rect,
        world_width: f64,
        world_height: f64,
    ) -> Option<(f64, f64)> {
        let inner = Self::inner_area(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        if screen_x >= inner.left()
            && screen_x < inner.right()
            && screen_y >= inner.top()
            && screen_y < inner.bottom()
        {
            let wx = ((screen_x - inner.x) as f64 + 0.5) / inner.width as f64 * world_width;
            let wy = ((screen_y - inner.y) as f64 + 0.5) / inner.height as f64 * world_height;
            Some((wx, wy))
        } else {
            None
        }
    }

    fn heading_glyph(orientation: f64) -> &'static str {
        // Eight compass sectors, 45 degrees each.
        let sector = ((orientation.rem_euclid(2.0 * PI) + FRAC_PI_4 / 2.0) / FRAC_PI_4) as usize % 8;
        ["→", "↘", "↓", "↙", "←", "↖", "↑", "↗"][sector]
    }
}

impl Widget for WorldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!("Aquarium (tick {})", self.world.tick))
            .borders(Borders::ALL);
        block.render(area, buf);

        let world_w = self.world.config.world.width;
        let world_h = self.world.config.world.height;

        for item in &self.world.food {
            if let Some((x, y)) =
                Self::world_to_screen(item.position.x, item.position.y, area, world_w, world_h)
            {
                buf.set_string(x, y, "•", Style::default().fg(item.color()));
            }
        }

        for creature in &self.world.creatures {
            let Some((x, y)) = Self::world_to_screen(
                creature.position.x,
                creature.position.y,
                area,
                world_w,
                world_h,
            ) else {
                continue;
            };

            let mut style = Style::default().fg(creature.color());
            if self.selected == Some(creature.id) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            buf.set_string(x, y, Self::heading_glyph(creature.orientation), style);

            // Only Resting and Speeding get a label, in red.
            if matches!(creature.status, Status::Resting | Status::Speeding) && y > area.y + 1 {
                let label = creature.status.label();
                let max = area.right().saturating_sub(x) as usize;
                if max > 0 {
                    buf.set_string(
                        x,
                        y - 1,
                        &label[..label.len().min(max)],
                        Style::default().fg(Color::Red),
                    );
                }
            }
        }
    }
}
