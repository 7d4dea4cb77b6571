use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::text::truncate_to_width,
    model::status_bar::{Severity, StatusBar},
};

pub struct StatusBarWidget<'a> {
    status_bar: &'a StatusBar,
    hint: &'a str,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status_bar: &'a StatusBar, hint: &'a str) -> Self {
        Self { status_bar, hint }
    }

    /// Status message if any, otherwise the key hint.
    pub fn text(&self) -> &str {
        self.status_bar.message().unwrap_or(self.hint)
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = match (self.status_bar.message(), self.status_bar.severity()) {
            (None, _) => Style::default().fg(Color::Gray).italic(),
            (Some(_), Severity::Info) => Style::default(),
            (Some(_), Severity::Error) => Style::default().fg(Color::Red),
        };
        let text = truncate_to_width(self.text(), usize::from(area.width));
        Paragraph::new(Span::styled(text, style))
            .style(Style::default().bg(Color::Black))
            .render(area, buf);
    }
}
