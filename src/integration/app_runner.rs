use color_eyre::eyre::Result;
use ratatui::{prelude::Rect, Frame};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        tui::{Event, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the application: terminal events in, rendered frames out.
///
/// The terminal is injected, so the same loop runs against a real terminal
/// or a scripted test backend.
pub struct AppRunner {
    runtime: Runtime,
    tui: Box<dyn TuiLike>,
    components: Components,
}

impl AppRunner {
    pub fn new(state: AppState, tui: Box<dyn TuiLike>) -> Self {
        Self {
            runtime: Runtime::new(state),
            tui,
            components: Components::new(),
        }
    }

    pub fn new_with_config(config: Config, tui: Box<dyn TuiLike>) -> Self {
        Self::new(AppState::new_with_config(config), tui)
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    /// Run until quit is requested or the terminal stops producing events.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.sync_components();
        self.render()?;

        loop {
            let event = match self.tui.next().await {
                Some(Event::Closed) | None => {
                    log::info!("event stream closed");
                    break;
                }
                Some(event) => event,
            };
            let render_requested = self.handle_event(event);

            self.run_update_cycle()?;
            self.sync_components();

            if self.state().system.should_quit {
                break;
            }
            if render_requested {
                self.render()?;
            }
        }

        self.components.release();
        self.tui.exit()?;
        Ok(())
    }

    /// Forwards a terminal event to the runtime. Returns whether a frame is due.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            Event::Render => return true,
            Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("failed to read terminal event".to_string())),
            Event::Init
            | Event::Closed
            | Event::FocusGained
            | Event::FocusLost
            | Event::Paste(_)
            | Event::Mouse(_) => return false,
        }
        // Anything that reached the runtime may have changed what is shown
        true
    }

    /// Process queued messages until no command is left to execute.
    fn run_update_cycle(&mut self) -> Result<()> {
        loop {
            self.runtime.process_all_messages();
            let commands = self.runtime.take_commands();
            if commands.is_empty() {
                return Ok(());
            }
            for cmd in commands {
                self.execute(cmd)?;
            }
        }
    }

    fn execute(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                self.tui.resize(Rect::new(0, 0, width, height))?;
            }
            Cmd::Tui(TuiCommand::Suspend) => {
                self.tui.suspend()?;
                // Returns once the process is continued
                self.tui.resume()?;
                self.runtime.send_raw_msg(RawMsg::Resume);
            }
        }
        Ok(())
    }

    fn sync_components(&mut self) {
        let state = self.runtime.state();
        self.components.sync(state.ui.active_tab, &state.session);
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui
            .draw(&mut |frame: &mut Frame<'_>| components.render(frame, state))
    }
}
