use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph, Wrap},
};

/// A rounded, titled box around a few lines of text.
pub struct CardWidget<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    border_style: Style,
}

impl<'a> CardWidget<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            border_style: Style::default(),
        }
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Rows needed to show every line plus the border.
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX).saturating_add(2)
    }
}

/// A label set off from surrounding text, like a chip.
pub fn chip(label: &str, style: Style) -> Span<'_> {
    Span::styled(format!(" {label} "), style)
}

impl<'a> Widget for CardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style)
            .title(self.title);
        Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
