use ratatui::prelude::*;
use ratatui::widgets::{Tabs, Widget};

use crate::core::state::ui::Tab;

#[derive(Clone)]
pub struct TabBarWidget {
    active: Tab,
    highlight: Style,
}

impl TabBarWidget {
    pub fn new(active: Tab, highlight: Style) -> Self {
        Self { active, highlight }
    }

    pub fn titles(&self) -> Vec<String> {
        Tab::titles()
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let tabs = Tabs::new(self.titles())
            .select(self.active.index())
            .style(Style::default().bg(Color::Black))
            .highlight_style(self.highlight);

        tabs.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::test::buffer_text;

    #[test]
    fn test_titles() {
        let widget = TabBarWidget::new(Tab::Home, Style::default());
        assert_eq!(widget.titles(), vec!["Home", "Discover", "Moments"]);
    }

    #[test]
    fn test_render_lists_all_tabs() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        TabBarWidget::new(Tab::Moments, Style::default().reversed()).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Home"));
        assert!(text.contains("Discover"));
        assert!(text.contains("Moments"));
    }

    #[test]
    fn test_render_highlights_active_tab() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        TabBarWidget::new(Tab::Home, Style::default().reversed()).render(area, &mut buf);

        // " Home " starts after the one-column padding
        assert!(buf[(1, 0)].modifier.contains(Modifier::REVERSED));
    }
}
