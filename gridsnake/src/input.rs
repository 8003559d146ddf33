use std::collections::HashSet;
use tetra::input::{self, Key};
use tetra::Context;

/// Answers whether a key is held down this frame
pub trait KeyQuery {
    fn is_pressed(&self, key: Key) -> bool;
}

impl KeyQuery for Context {
    fn is_pressed(&self, key: Key) -> bool {
        input::is_key_down(self, key)
    }
}

/// A fixed set of held keys, for driving states without a window
impl KeyQuery for HashSet<Key> {
    fn is_pressed(&self, key: Key) -> bool {
        self.contains(&key)
    }
}

/// Key bindings for the playing state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Controls {
    pub turn_right: Key,
    pub turn_left: Key,
    pub quit: Key,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            turn_right: Key::D,
            turn_left: Key::A,
            quit: Key::Escape,
        }
    }
}

/// Remembers last frame's key state so a held key fires once
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyLatch {
    was_down: bool,
}

impl KeyLatch {
    /// True only on the frame the key goes from up to down
    pub fn rising(&mut self, down: bool) -> bool {
        let fired = down && !self.was_down;
        self.was_down = down;
        fired
    }
}
