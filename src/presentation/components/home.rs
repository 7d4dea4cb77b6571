//! Home dashboard surface
//!
//! On activation the surface subscribes to the four dashboard fields it
//! shows. Each callback overwrites one text in a shared [`HomeTexts`]; the
//! view only reads those texts, so what is drawn is always the last value
//! published. Deactivation drops the binding and with it every subscription.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::prelude::*;

use crate::{
    domain::{
        calendar::{is_weekend, month_label},
        mock,
    },
    model::{observable::Subscription, session::Session},
    presentation::{
        components::{Surface, ViewContext},
        widgets::card::{chip, CardWidget},
    },
};

/// Last values received from the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeTexts {
    pub days_together: String,
    pub weather_summary: String,
    pub weather_advice: String,
    pub selected_date_weather: String,
}

struct HomeBinding {
    texts: Rc<RefCell<HomeTexts>>,
    _subscriptions: Vec<Subscription>,
}

impl HomeBinding {
    fn bind(session: &Session) -> Self {
        let dashboard = session.dashboard();
        let texts = Rc::new(RefCell::new(HomeTexts::default()));

        let field = |assign: fn(&mut HomeTexts, &str)| {
            let texts = Rc::clone(&texts);
            move |value: &String| assign(&mut texts.borrow_mut(), value)
        };

        let subscriptions = vec![
            dashboard
                .days_together_text()
                .subscribe(field(|t, v| t.days_together = v.to_owned())),
            dashboard
                .weather_summary_text()
                .subscribe(field(|t, v| t.weather_summary = v.to_owned())),
            dashboard
                .weather_advice_text()
                .subscribe(field(|t, v| t.weather_advice = v.to_owned())),
            dashboard
                .selected_date_weather_text()
                .subscribe(field(|t, v| t.selected_date_weather = v.to_owned())),
        ];

        Self {
            texts,
            _subscriptions: subscriptions,
        }
    }
}

#[derive(Default)]
pub struct HomeScreen {
    binding: Option<HomeBinding>,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the bound texts, `None` while inactive.
    pub fn texts(&self) -> Option<HomeTexts> {
        self.binding
            .as_ref()
            .map(|binding| binding.texts.borrow().clone())
    }
}

impl Surface for HomeScreen {
    fn activate(&mut self, session: &Session) {
        self.binding = Some(HomeBinding::bind(session));
    }

    fn deactivate(&mut self) {
        self.binding = None;
    }

    fn is_active(&self) -> bool {
        self.binding.is_some()
    }

    fn view(&self, ctx: &ViewContext<'_>, frame: &mut Frame, area: Rect) {
        let Some(texts) = self.texts() else {
            return;
        };
        let accent = ctx.styles.style("accent");
        let muted = ctx.styles.style("muted");
        let chip_style = ctx.styles.style("chip");

        let selected = ctx.ui.selected_date;
        let mut date_line = vec![Span::styled(
            selected.format("%a %-d %b").to_string(),
            accent,
        )];
        if selected == ctx.ui.today() {
            date_line.push(Span::styled("  today", muted));
        } else if is_weekend(selected) {
            date_line.push(Span::styled("  weekend", muted));
        }
        let month = month_label(selected);

        let cards = [
            CardWidget::new(
                "Together",
                vec![Line::styled(texts.days_together.as_str(), accent)],
            ),
            CardWidget::new(
                "Weather",
                vec![
                    Line::from(texts.weather_summary.as_str()),
                    Line::from(chip(&texts.weather_advice, chip_style)),
                ],
            ),
            CardWidget::new(
                &month,
                vec![
                    Line::from(date_line),
                    Line::from(vec![
                        Span::styled("Weather: ", muted),
                        Span::raw(texts.selected_date_weather.as_str()),
                    ]),
                ],
            ),
            CardWidget::new(
                "This Weekend",
                vec![
                    Line::from(mock::WEEKEND_HEADER),
                    Line::from(chip(mock::AI_SUGGESTED_CHIP, chip_style)),
                ],
            ),
        ];

        let mut constraints: Vec<Constraint> =
            cards.iter().map(|c| Constraint::Length(c.height())).collect();
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (card, row) in cards.into_iter().zip(rows.iter()) {
            frame.render_widget(card.border_style(muted), *row);
        }
    }
}
