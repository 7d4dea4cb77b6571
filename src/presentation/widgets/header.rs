use ratatui::{prelude::*, widgets::Paragraph};

/// App name followed by the subtitle, on one line.
pub struct HeaderWidget<'a> {
    app_name: &'a str,
    subtitle: &'a str,
    accent: Style,
    muted: Style,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(app_name: &'a str, subtitle: &'a str) -> Self {
        Self {
            app_name,
            subtitle,
            accent: Style::default().bold(),
            muted: Style::default().dim(),
        }
    }

    pub fn styles(mut self, accent: Style, muted: Style) -> Self {
        self.accent = accent;
        self.muted = muted;
        self
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.app_name, self.accent),
            Span::raw("  "),
            Span::styled(self.subtitle, self.muted),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::buffer_text;

    #[test]
    fn test_render() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new("LovAi", "Together Forever").render(area, &mut buf);

        assert_eq!(buffer_text(&buf), "LovAi  Together Forever");
        assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
    }
}
