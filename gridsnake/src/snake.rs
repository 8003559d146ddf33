use serde::Deserialize;
use tetra::graphics::Color;
use tracing::{debug, warn};
use crate::cell::GridCell;
use crate::layout::CellLayout;
use crate::rendering::QuadSink;

pub const DEFAULT_MOVE_INTERVAL: f32 = 1.0;

const SNAKE_COLOR: Color = Color::rgb(0.3, 0.85, 0.3);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// North -> East -> South -> West -> North
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Unit step in device coordinates, `y` up
    pub fn unit(self) -> (f32, f32) {
        match self {
            Direction::North => (0.0, 1.0),
            Direction::East => (1.0, 0.0),
            Direction::South => (0.0, -1.0),
            Direction::West => (-1.0, 0.0),
        }
    }
}

/// What happens to leftover time when an update crosses the movement interval
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickPolicy {
    /// At most one move per update; the accumulator drops back to zero.
    /// A long stall collapses several intervals into one move.
    Reset,

    /// One move per elapsed interval; the accumulator keeps the remainder.
    CatchUp,
}

impl Default for TickPolicy {
    fn default() -> Self {
        TickPolicy::Reset
    }
}

//
// Snake

/// A chain of cells, head first, that advances one cell length per movement interval.
///
/// Only the head moves for now: there is no growth, so the body is a single segment.
pub struct Snake {
    body: Vec<GridCell>,
    heading: Direction,
    move_interval: f32,
    accumulator: f32,
    tick_policy: TickPolicy,
}

impl Snake {
    pub fn new(layout: &CellLayout, x: f32, y: f32) -> Self {
        Snake {
            body: vec![GridCell::new(layout, x, y)],
            heading: Direction::East,
            move_interval: DEFAULT_MOVE_INTERVAL,
            accumulator: 0.0,
            tick_policy: TickPolicy::default(),
        }
    }

    /// Intervals that are not a positive finite number of seconds are ignored.
    pub fn with_interval(mut self, move_interval: f32) -> Self {
        if move_interval.is_finite() && move_interval > 0.0 {
            self.move_interval = move_interval;
        } else {
            warn!(move_interval, "ignoring invalid move interval");
        }
        self
    }

    pub fn with_tick_policy(mut self, tick_policy: TickPolicy) -> Self {
        self.tick_policy = tick_policy;
        self
    }

    pub fn current_direction(&self) -> Direction {
        self.heading
    }

    /// Takes effect on the next move; reversing into the body is not prevented.
    pub fn change_current_direction(&mut self, direction: Direction) {
        self.heading = direction;
    }

    /// Advances the clock by `delta_time` seconds and returns how many moves were made.
    pub fn update(&mut self, delta_time: f32) -> u32 {
        self.accumulator += delta_time;

        let mut moves = 0;
        match self.tick_policy {
            TickPolicy::Reset => {
                if self.accumulator >= self.move_interval {
                    self.accumulator = 0.0;
                    self.step();
                    moves = 1;
                }
            }
            TickPolicy::CatchUp => {
                while self.accumulator >= self.move_interval {
                    self.accumulator -= self.move_interval;
                    self.step();
                    moves += 1;
                }
            }
        }
        moves
    }

    fn step(&mut self) {
        let head = &mut self.body[0];
        let length = head.layout().length();
        let (dx, dy) = self.heading.unit();
        let (x, y) = head.position();
        head.reposition(x + dx * length, y + dy * length);
        debug!(heading = ?self.heading, position = ?head.position(), "snake moved");
    }

    pub fn draw(&self, sink: &mut dyn QuadSink) {
        for segment in self.body.iter() {
            segment.draw(sink, SNAKE_COLOR);
        }
    }

    pub fn head_position(&self) -> (f32, f32) {
        self.body[0].position()
    }

    pub fn segments(&self) -> &[GridCell] {
        &self.body
    }

    /// Time collected towards the next move
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn move_interval(&self) -> f32 {
        self.move_interval
    }
}
