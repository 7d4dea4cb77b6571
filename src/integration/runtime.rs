use std::collections::VecDeque;

use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Owns the application state and feeds it messages.
///
/// Raw events are translated first, then domain messages are folded through
/// [`update`]. Commands are queued until the host takes them.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::debug!("raw message: {raw_msg:?}");
        }
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        log::debug!("message: {msg:?}");
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate queued raw messages, then process every queued message.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(msgs);
        }

        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    /// Drains the command queue.
    pub fn take_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        self.msg_queue.len() + self.raw_msg_queue.len()
    }
}
