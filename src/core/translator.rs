use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{ui::Tab, AppState},
    },
    model::dashboard::Message as HomeMsg,
    presentation::config::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError {
            label: "Terminal".to_string(),
            message: error,
        })],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global bindings work even if the config drops them
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.config.config.keybindings.action_for(key) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::ClearStatus => vec![Msg::System(SystemMsg::ClearStatus)],
        Action::NextTab => vec![Msg::Ui(UiMsg::NextTab)],
        Action::PrevTab => vec![Msg::Ui(UiMsg::PrevTab)],
        Action::ShowHome => vec![Msg::Ui(UiMsg::ShowTab(Tab::Home))],
        Action::ShowDiscover => vec![Msg::Ui(UiMsg::ShowTab(Tab::Discover))],
        Action::ShowMoments => vec![Msg::Ui(UiMsg::ShowTab(Tab::Moments))],

        // The calendar and refresh actions only exist on the home screen
        _ if !state.ui.is_home() => vec![],
        Action::PrevDay => vec![Msg::Ui(UiMsg::ShiftSelectedDate(-1))],
        Action::NextDay => vec![Msg::Ui(UiMsg::ShiftSelectedDate(1))],
        Action::PrevWeek => vec![Msg::Ui(UiMsg::ShiftSelectedDate(-7))],
        Action::NextWeek => vec![Msg::Ui(UiMsg::ShiftSelectedDate(7))],
        Action::Today => vec![Msg::Ui(UiMsg::SelectToday)],
        Action::RefreshWeather => vec![Msg::Home(HomeMsg::WeatherRefreshRequested)],
        Action::RefreshRecommendations => {
            vec![Msg::Home(HomeMsg::RecommendationsRefreshRequested)]
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::infrastructure::config::Config;

    #[fixture]
    #[allow(clippy::unwrap_used)]
    fn state() -> AppState {
        AppState::new_with_config(Config::embedded_default().unwrap())
    }

    fn key(c: char) -> RawMsg {
        RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
    }

    #[rstest]
    fn test_ctrl_c_always_quits(state: AppState) {
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[rstest]
    fn test_ctrl_z_suspends(state: AppState) {
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![Msg::System(SystemMsg::Suspend)]
        );
    }

    #[rstest]
    #[case('q', vec![Msg::System(SystemMsg::Quit)])]
    #[case('r', vec![Msg::Home(HomeMsg::WeatherRefreshRequested)])]
    #[case('s', vec![Msg::Home(HomeMsg::RecommendationsRefreshRequested)])]
    #[case('l', vec![Msg::Ui(UiMsg::ShiftSelectedDate(1))])]
    #[case('h', vec![Msg::Ui(UiMsg::ShiftSelectedDate(-1))])]
    #[case('j', vec![Msg::Ui(UiMsg::ShiftSelectedDate(7))])]
    #[case('t', vec![Msg::Ui(UiMsg::SelectToday)])]
    #[case('2', vec![Msg::Ui(UiMsg::ShowTab(Tab::Discover))])]
    #[case('x', vec![])]
    fn test_home_keys(state: AppState, #[case] c: char, #[case] expected: Vec<Msg>) {
        assert_eq!(translate_raw_to_domain(key(c), &state), expected);
    }

    #[rstest]
    fn test_home_only_keys_ignored_elsewhere(mut state: AppState) {
        state.ui.active_tab = Tab::Moments;

        assert!(translate_raw_to_domain(key('r'), &state).is_empty());
        assert!(translate_raw_to_domain(key('l'), &state).is_empty());
        assert_eq!(
            translate_raw_to_domain(key('1'), &state),
            vec![Msg::Ui(UiMsg::ShowTab(Tab::Home))]
        );
    }

    #[rstest]
    fn test_tick_and_render_are_dropped(state: AppState) {
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }

    #[rstest]
    fn test_resize_and_error(state: AppState) {
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(100, 40), &state),
            vec![Msg::System(SystemMsg::Resize(100, 40))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Error("boom".to_string()), &state),
            vec![Msg::System(SystemMsg::ShowError {
                label: "Terminal".to_string(),
                message: "boom".to_string(),
            })]
        );
    }
}
