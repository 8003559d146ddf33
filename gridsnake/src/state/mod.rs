use tracing::debug;
use crate::input::KeyQuery;
use crate::rendering::QuadSink;

/// An enum representing the transitions a state can ask the stack for
pub enum Trans {
    /// Continue as normal
    None,

    /// Push the provided state on top of the current one
    Push(Box<dyn GameState>),

    /// Pop the state off the top of the stack
    Pop,

    /// Swaps the state at the top of the stack for the provided one, without pause/resume
    Switch(Box<dyn GameState>),

    /// Ask the frame driver to close the game
    Quit,
}

/// A trait representing a type that contains game state and provides logic for updating it
/// and drawing it to the screen.
///
/// Only the state at the top of a `GameStateStack` receives `handle_input`, `update` and
/// `render`. The lifecycle hooks are called by the stack as states are pushed, covered,
/// uncovered and removed.
#[allow(unused_variables)]
pub trait GameState {
    /// Used in log output
    fn name(&self) -> &str {
        "state"
    }

    /// Called when the state becomes the top of the stack by push or change
    fn enter(&mut self) {

    }

    /// Called right before the state is removed from the stack and dropped
    fn exit(&mut self) {

    }

    /// Called when another state is pushed on top of this one
    fn pause(&mut self) {

    }

    /// Called when the state above this one is popped
    fn resume(&mut self) {

    }

    fn handle_input(&mut self, keys: &dyn KeyQuery, delta_time: f32);

    /// Called once per frame. The returned transition is applied after this call returns.
    fn update(&mut self, delta_time: f32) -> Trans;

    fn render(&mut self, sink: &mut dyn QuadSink);
}

/// Owns a LIFO stack of states and forwards frame calls to the top one.
///
/// Every state that goes in receives `enter` once and `exit` once before it is dropped,
/// including the ones still on the stack when the stack itself is dropped.
pub struct GameStateStack {
    states: Vec<Box<dyn GameState>>,
    quit_requested: bool,
}

impl GameStateStack {
    pub fn new() -> Self {
        GameStateStack {
            states: vec![],
            quit_requested: false,
        }
    }

    /// Pauses the current top, then enters `state`
    pub fn push_state(&mut self, mut state: Box<dyn GameState>) {
        if let Some(s) = self.states.last_mut() {
            debug!(state = s.name(), "pause");
            s.pause();
        }
        debug!(state = state.name(), "enter");
        state.enter();
        self.states.push(state);
    }

    /// Exits and drops the top, then resumes the state below it. No-op when empty.
    pub fn pop_state(&mut self) {
        if let Some(mut s) = self.states.pop() {
            debug!(state = s.name(), "exit");
            s.exit();
            drop(s);

            if let Some(s) = self.states.last_mut() {
                debug!(state = s.name(), "resume");
                s.resume();
            }
        }
    }

    /// Exits and drops the top (if any), then enters `state` in its place
    pub fn change_state(&mut self, mut state: Box<dyn GameState>) {
        if let Some(mut s) = self.states.pop() {
            debug!(state = s.name(), "exit");
            s.exit();
        }
        debug!(state = state.name(), "enter");
        state.enter();
        self.states.push(state);
    }

    /// Exits every state, most recently pushed first. States underneath are not resumed.
    /// Also drops any pending quit request.
    pub fn clear(&mut self) {
        while let Some(mut s) = self.states.pop() {
            debug!(state = s.name(), "exit");
            s.exit();
        }
        self.quit_requested = false;
    }

    pub fn handle_input(&mut self, keys: &dyn KeyQuery, delta_time: f32) {
        if let Some(s) = self.states.last_mut() {
            s.handle_input(keys, delta_time);
        }
    }

    pub fn update(&mut self, delta_time: f32) {
        let trans = match self.states.last_mut() {
            Some(s) => s.update(delta_time),
            None => Trans::None,
        };
        self.run_trans(trans);
    }

    pub fn render(&mut self, sink: &mut dyn QuadSink) {
        if let Some(s) = self.states.last_mut() {
            s.render(sink);
        }
    }

    pub fn run_trans(&mut self, trans: Trans) {
        match trans {
            Trans::None => {},
            Trans::Push(state) => { self.push_state(state) },
            Trans::Pop => { self.pop_state() },
            Trans::Switch(state) => { self.change_state(state) },
            Trans::Quit => { self.quit_requested = true },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// The active state
    pub fn current_state(&self) -> Option<&dyn GameState> {
        self.states.last().map(|s| s.as_ref())
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl Default for GameStateStack {
    fn default() -> Self {
        GameStateStack::new()
    }
}

impl Drop for GameStateStack {
    fn drop(&mut self) {
        self.clear();
    }
}
