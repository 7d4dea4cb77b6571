//! Surfaces and their collection
//!
//! A surface is one screen. It is activated with the session when its tab
//! becomes visible and deactivated when another tab takes over. Only the
//! active surface is rendered.

use ratatui::prelude::*;

use crate::{
    core::state::{ui::Tab, ui::UiState, AppState},
    domain::mock,
    model::session::Session,
    presentation::{
        config::Styles,
        widgets::{header::HeaderWidget, status_bar::StatusBarWidget, tab_bar::TabBarWidget},
    },
};

pub mod home;
pub mod placeholder;

pub use home::HomeScreen;
pub use placeholder::PlaceholderScreen;

const HOME_HINT: &str = "Tab: switch  ←/→: day  ↑/↓: week  t: today  r: weather  s: weekend  q: quit";
const HINT: &str = "Tab: switch  1-3: jump  q: quit";

/// What a surface may read while rendering, besides its own binding.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub ui: &'a UiState,
    pub styles: &'a Styles,
}

pub trait Surface {
    /// Binds the surface to the session. Current values arrive immediately.
    fn activate(&mut self, session: &Session);

    /// Drops everything bound in `activate`.
    fn deactivate(&mut self);

    fn is_active(&self) -> bool;

    fn view(&self, ctx: &ViewContext<'_>, frame: &mut Frame, area: Rect);
}

/// Collection of all surfaces plus the chrome around them
pub struct Components {
    pub home: HomeScreen,
    pub discover: PlaceholderScreen,
    pub moments: PlaceholderScreen,
    active: Option<Tab>,
}

impl Components {
    pub fn new() -> Self {
        Self {
            home: HomeScreen::new(),
            discover: PlaceholderScreen::new(mock::DISCOVER_PLACEHOLDER),
            moments: PlaceholderScreen::new(mock::MOMENTS_PLACEHOLDER),
            active: None,
        }
    }

    pub fn active(&self) -> Option<Tab> {
        self.active
    }

    fn surface_mut(&mut self, tab: Tab) -> &mut dyn Surface {
        match tab {
            Tab::Home => &mut self.home,
            Tab::Discover => &mut self.discover,
            Tab::Moments => &mut self.moments,
        }
    }

    fn surface(&self, tab: Tab) -> &dyn Surface {
        match tab {
            Tab::Home => &self.home,
            Tab::Discover => &self.discover,
            Tab::Moments => &self.moments,
        }
    }

    /// Makes `tab` the active surface, deactivating the previous one.
    pub fn sync(&mut self, tab: Tab, session: &Session) {
        if self.active == Some(tab) {
            return;
        }
        if let Some(previous) = self.active {
            log::debug!("deactivating {previous}");
            self.surface_mut(previous).deactivate();
        }
        log::debug!("activating {tab}");
        self.surface_mut(tab).activate(session);
        self.active = Some(tab);
    }

    /// Deactivates whatever is active, e.g. on shutdown.
    pub fn release(&mut self) {
        if let Some(previous) = self.active.take() {
            self.surface_mut(previous).deactivate();
        }
    }

    /// Render header, tab bar, the active surface and the status bar
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // Header
                Constraint::Length(1), // Tabs
                Constraint::Min(0),    // Active surface
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        let styles = &state.config.config.styles;
        let couple = state.session.couple();
        frame.render_widget(
            HeaderWidget::new(&couple.app_name, &couple.subtitle)
                .styles(styles.style("accent"), styles.style("muted")),
            layout[0],
        );
        frame.render_widget(
            TabBarWidget::new(state.ui.active_tab, styles.style("selected")),
            layout[1],
        );

        if let Some(tab) = self.active {
            let ctx = ViewContext {
                ui: &state.ui,
                styles,
            };
            self.surface(tab).view(&ctx, frame, layout[2]);
        }

        let hint = if state.ui.is_home() { HOME_HINT } else { HINT };
        frame.render_widget(StatusBarWidget::new(&state.status_bar, hint), layout[3]);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::calendar::FixedClock, infrastructure::config::Config,
        infrastructure::tui::test::buffer_text,
    };
    use ratatui::{backend::TestBackend, Terminal};

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2023, 4, 1).expect("valid date");
        AppState::new_with_clock(Config::default(), &FixedClock(today))
    }

    #[test]
    fn test_sync_switches_active_surface() {
        let state = state();
        let mut components = Components::new();
        assert_eq!(components.active(), None);

        components.sync(Tab::Home, &state.session);
        assert!(components.home.is_active());

        components.sync(Tab::Discover, &state.session);
        assert!(!components.home.is_active());
        assert!(components.discover.is_active());
        assert_eq!(components.active(), Some(Tab::Discover));

        components.release();
        assert!(!components.discover.is_active());
        assert_eq!(components.active(), None);
    }

    #[test]
    fn test_sync_same_tab_keeps_binding() {
        let state = state();
        let mut components = Components::new();
        components.sync(Tab::Home, &state.session);
        let subscribers = state
            .session
            .dashboard()
            .days_together_text()
            .subscriber_count();

        components.sync(Tab::Home, &state.session);

        assert_eq!(
            state
                .session
                .dashboard()
                .days_together_text()
                .subscriber_count(),
            subscribers
        );
    }

    #[test]
    fn test_render_chrome() -> color_eyre::Result<()> {
        let state = state();
        let mut components = Components::new();
        components.sync(Tab::Home, &state.session);

        let mut terminal = Terminal::new(TestBackend::new(100, 30))?;
        terminal.draw(|frame| components.render(frame, &state))?;
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.starts_with("LovAi  Together Forever"));
        assert!(text.contains("Discover"));
        assert!(text.contains("290 days together"));
        assert!(text.contains("q: quit"));
        Ok(())
    }
}
