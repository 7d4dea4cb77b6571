use crate::{
    core::cmd::Cmd,
    core::msg::{system::SystemMsg, Msg},
    core::state::AppState,
    domain::mock,
    model::dashboard::{Message as HomeMsg, SourceStatus},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg, &mut state.status_bar);
            (state, commands)
        }

        Msg::Ui(ui_msg) => {
            let previous_date = state.ui.selected_date;
            let mut commands = state.ui.update(ui_msg);

            // Moving the calendar cursor is a date selection for the dashboard
            if state.ui.selected_date != previous_date {
                let date = state.ui.selected_date;
                let (next_state, home_commands) =
                    update(Msg::Home(HomeMsg::DateSelected { date }), state);
                state = next_state;
                commands.extend(home_commands);
            }
            (state, commands)
        }

        Msg::Home(home_msg) => {
            let status = state.session.dashboard().update(home_msg.clone());
            let commands = match report(&home_msg, status) {
                Some(report) => state.system.update(report, &mut state.status_bar),
                None => vec![],
            };
            (state, commands)
        }
    }
}

/// Status line feedback for a dashboard operation.
fn report(msg: &HomeMsg, status: SourceStatus) -> Option<SystemMsg> {
    match (msg, status) {
        (HomeMsg::WeatherRefreshRequested, SourceStatus::Mock) => Some(SystemMsg::ShowStatus {
            label: "Weather".to_string(),
            message: "showing sample weather".to_string(),
        }),
        (HomeMsg::RecommendationsRefreshRequested, SourceStatus::Unavailable) => {
            Some(SystemMsg::ShowStatus {
                label: "Weekend".to_string(),
                message: mock::RECOMMENDATIONS_UNAVAILABLE.to_string(),
            })
        }
        _ => None,
    }
}
