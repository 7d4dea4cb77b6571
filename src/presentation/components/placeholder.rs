//! Surfaces that have nothing to bind yet and show a fixed text.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    model::session::Session,
    presentation::components::{Surface, ViewContext},
};

#[derive(Debug, Clone)]
pub struct PlaceholderScreen {
    text: &'static str,
    active: bool,
}

impl PlaceholderScreen {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            active: false,
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }
}

impl Surface for PlaceholderScreen {
    fn activate(&mut self, _session: &Session) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn view(&self, ctx: &ViewContext<'_>, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.text.lines().map(Line::from).collect();
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        // Vertically centered
        let top = area.height.saturating_sub(height) / 2;
        let inner = Rect {
            y: area.y.saturating_add(top),
            height: area.height.saturating_sub(top),
            ..area
        };
        frame.render_widget(
            Paragraph::new(lines)
                .style(ctx.styles.style("muted"))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            inner,
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};
    use rstest::*;

    use super::*;
    use crate::{
        core::state::ui::UiState,
        domain::{calendar::FixedClock, mock},
        infrastructure::tui::test::buffer_text,
        presentation::config::Styles,
    };

    #[test]
    fn test_lifecycle_does_not_touch_dashboard() {
        let today = NaiveDate::from_ymd_opt(2023, 4, 1).expect("valid date");
        let session = Session::new(Default::default(), &FixedClock(today));
        let mut screen = PlaceholderScreen::new(mock::DISCOVER_PLACEHOLDER);

        screen.activate(&session);
        assert!(screen.is_active());
        assert_eq!(session.dashboard().days_together_text().subscriber_count(), 0);

        screen.deactivate();
        assert!(!screen.is_active());
    }

    #[rstest]
    #[case(mock::DISCOVER_PLACEHOLDER, "Discover")]
    #[case(mock::MOMENTS_PLACEHOLDER, "Moments")]
    fn test_view_centers_text(
        #[case] text: &'static str,
        #[case] title: &str,
    ) -> color_eyre::Result<()> {
        let ui = UiState::new(NaiveDate::from_ymd_opt(2023, 4, 1).expect("valid date"));
        let styles = Styles::default();
        let ctx = ViewContext {
            ui: &ui,
            styles: &styles,
        };
        let screen = PlaceholderScreen::new(text);

        let mut terminal = Terminal::new(TestBackend::new(30, 6))?;
        terminal.draw(|frame| screen.view(&ctx, frame, frame.area()))?;
        let rendered = buffer_text(terminal.backend().buffer());
        let rows: Vec<&str> = rendered.lines().collect();

        assert!(rows[2].trim().starts_with(title));
        assert!(rows[3].contains("Coming Soon"));
        Ok(())
    }
}
