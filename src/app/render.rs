use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::app::state::App;
use crate::model::health::Health;
use crate::ui::renderer::WorldWidget;

fn health_color(health: &Health) -> Color {
    if health.ratio() > 0.5 {
        Color::Green
    } else if health.ratio() > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    }
}

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(36)])
            .split(f.area());

        self.last_world_area = chunks[0];
        f.render_widget(WorldWidget::new(&self.world, self.selected), chunks[0]);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(9),
                Constraint::Length(4),
            ])
            .split(chunks[1]);

        self.draw_roster(f, sidebar[0]);
        self.draw_info(f, sidebar[1]);
        self.draw_help(f, sidebar[2]);
    }

    fn draw_roster(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut lines = Vec::new();
        for creature in &self.world.creatures {
            let marker = if self.selected == Some(creature.id) {
                "▶ "
            } else {
                "  "
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    creature.name.clone(),
                    Style::default()
                        .fg(creature.color())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " {:>3.0}/{:.0} ",
                    creature.health.current, creature.health.max
                )),
                Span::styled(
                    creature.status.label(),
                    Style::default().fg(health_color(&creature.health)),
                ),
            ]));
        }
        lines.push(Line::from(format!(
            "food: {}   fps: {:.0}{}",
            self.world.food.len(),
            self.fps,
            if self.paused { "   PAUSED" } else { "" }
        )));

        let roster = Paragraph::new(lines).block(Block::default().title("Tank").borders(Borders::ALL));
        f.render_widget(roster, area);
    }

    /// Detail panel for the selected creature.
    fn draw_info(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let block = Block::default().title("Selected").borders(Borders::ALL);

        let Some(creature) = self
            .selected
            .and_then(|id| self.world.creatures.iter().find(|c| c.id == id))
        else {
            let hint = Paragraph::new("click a fish to inspect it").block(block);
            f.render_widget(hint, area);
            return;
        };

        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(inner);

        let info = Paragraph::new(vec![
            Line::from(format!("Name:   {} ({})", creature.name, creature.gender)),
            Line::from(format!("Size:   {}x{}", creature.width, creature.height)),
            Line::from(format!("Status: {}", creature.status.label())),
            Line::from(format!("Eaten:  {}", creature.food_eaten)),
        ]);
        f.render_widget(info, rows[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(health_color(&creature.health)))
            .ratio(creature.health.ratio().clamp(0.0, 1.0))
            .label(format!(
                "{:.0}/{:.0}",
                creature.health.current, creature.health.max
            ));
        f.render_widget(gauge, rows[1]);
    }

    fn draw_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help = Paragraph::new(vec![
            Line::from("arrows move  s burst  a rest"),
            Line::from("f food  space pause  q quit"),
        ])
        .block(Block::default().title("Keys").borders(Borders::ALL));
        f.render_widget(help, area);
    }
}
