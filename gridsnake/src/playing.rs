use tetra::graphics::Color;
use tracing::debug;
use crate::food::{Food, FoodSpawner};
use crate::input::{Controls, KeyLatch, KeyQuery};
use crate::layout::CellLayout;
use crate::rendering::QuadSink;
use crate::snake::{Snake, TickPolicy, DEFAULT_MOVE_INTERVAL};
use crate::state::{GameState, Trans};

const BACKGROUND: Color = Color::BLACK;

/// Result of the collision hook run after every snake update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionOutcome {
    Continue,
    Terminate,
}

pub type CollisionCheck = Box<dyn FnMut(&Snake) -> CollisionOutcome>;

/// Exact match on both coordinates
pub fn is_food_eaten(head: (f32, f32), food: (f32, f32)) -> bool {
    head.0 == food.0 && head.1 == food.1
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayOptions {
    pub start_x: f32,
    pub start_y: f32,
    pub move_interval: f32,
    pub tick_policy: TickPolicy,
}

impl Default for PlayOptions {
    fn default() -> Self {
        PlayOptions {
            start_x: 0.0,
            start_y: 0.0,
            move_interval: DEFAULT_MOVE_INTERVAL,
            tick_policy: TickPolicy::default(),
        }
    }
}

//
// Playing

/// The gameplay state: one snake, one piece of food.
///
/// Both are created on `enter` and dropped on `exit`.
pub struct Playing {
    layout: CellLayout,
    options: PlayOptions,
    controls: Controls,
    spawner: Box<dyn FoodSpawner>,
    collision_check: CollisionCheck,
    snake: Option<Snake>,
    food: Option<Food>,
    turn_right: KeyLatch,
    turn_left: KeyLatch,
    quit: bool,
}

impl Playing {
    pub fn new(layout: CellLayout, options: PlayOptions, spawner: Box<dyn FoodSpawner>) -> Self {
        Playing {
            layout,
            options,
            controls: Controls::default(),
            spawner,
            collision_check: Box::new(|_| CollisionOutcome::Continue),
            snake: None,
            food: None,
            turn_right: KeyLatch::default(),
            turn_left: KeyLatch::default(),
            quit: false,
        }
    }

    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    /// Replaces the default hook, which never ends the game
    pub fn with_collision_check<F>(mut self, check: F) -> Self
        where F: FnMut(&Snake) -> CollisionOutcome + 'static {
        self.collision_check = Box::new(check);
        self
    }

    pub fn snake(&self) -> Option<&Snake> {
        self.snake.as_ref()
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn check_collisions(&mut self) -> CollisionOutcome {
        match self.snake.as_ref() {
            Some(snake) => (self.collision_check)(snake),
            None => CollisionOutcome::Continue,
        }
    }

    fn food_eaten(&self) -> bool {
        match (self.snake.as_ref(), self.food.as_ref()) {
            (Some(snake), Some(food)) => is_food_eaten(snake.head_position(), food.position()),
            _ => false,
        }
    }

    fn respawn_food(&mut self) {
        let (x, y) = self.spawner.spawn(&self.layout);
        if let Some(food) = self.food.as_mut() {
            food.reposition(x, y);
            debug!(x, y, "food respawned");
        }
    }
}

impl GameState for Playing {
    fn name(&self) -> &str {
        "playing"
    }

    fn enter(&mut self) {
        let options = self.options;
        self.snake = Some(
            Snake::new(&self.layout, options.start_x, options.start_y)
                .with_interval(options.move_interval)
                .with_tick_policy(options.tick_policy)
        );

        let (x, y) = self.spawner.spawn(&self.layout);
        self.food = Some(Food::new(&self.layout, x, y));
        self.quit = false;
    }

    fn exit(&mut self) {
        self.snake = None;
        self.food = None;
    }

    fn handle_input(&mut self, keys: &dyn KeyQuery, _: f32) {
        let right = self.turn_right.rising(keys.is_pressed(self.controls.turn_right));
        let left = self.turn_left.rising(keys.is_pressed(self.controls.turn_left));
        self.quit = keys.is_pressed(self.controls.quit);

        if let Some(snake) = self.snake.as_mut() {
            if right {
                snake.change_current_direction(snake.current_direction().turn_right());
            }
            if left {
                snake.change_current_direction(snake.current_direction().turn_left());
            }
        }
    }

    fn update(&mut self, delta_time: f32) -> Trans {
        if self.quit {
            return Trans::Quit;
        }

        match self.snake.as_mut() {
            Some(snake) => { snake.update(delta_time); },
            None => return Trans::None,
        }

        if self.check_collisions() == CollisionOutcome::Terminate {
            return Trans::Pop;
        }

        if self.food_eaten() {
            self.respawn_food();
        }

        Trans::None
    }

    fn render(&mut self, sink: &mut dyn QuadSink) {
        sink.clear(BACKGROUND);

        if let Some(snake) = self.snake.as_ref() {
            snake.draw(sink);
        }
        if let Some(food) = self.food.as_ref() {
            food.draw(sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tetra::input::Key;
    use crate::config::DisplayConfig;
    use crate::food::FixedSpawner;
    use crate::rendering::DrawBuffer;
    use crate::snake::Direction;

    fn playing(food: (f32, f32)) -> Playing {
        let display = DisplayConfig::shared(800, 800, 10);
        let layout = CellLayout::attach(&display);
        let mut playing = Playing::new(layout, PlayOptions::default(), Box::new(FixedSpawner { x: food.0, y: food.1 }));
        playing.enter();
        playing
    }

    fn keys(held: &[Key]) -> HashSet<Key> {
        held.iter().cloned().collect()
    }

    fn heading(playing: &Playing) -> Direction {
        playing.snake().map(|s| s.current_direction()).unwrap()
    }

    #[test]
    fn eaten_only_on_exact_match() {
        assert!(is_food_eaten((0.2, -0.4), (0.2, -0.4)));
        assert!(!is_food_eaten((0.2, -0.4), (0.2, -0.400_001)));
        assert!(!is_food_eaten((0.2, -0.4), (0.3, -0.4)));
    }

    #[test]
    fn enter_builds_and_exit_drops_the_world() {
        let mut playing = playing((0.5, 0.5));
        assert_eq!(playing.snake().map(|s| s.head_position()), Some((0.0, 0.0)));
        assert_eq!(playing.food().map(|f| f.position()), Some((0.5, 0.5)));

        playing.exit();
        assert!(playing.snake().is_none());
        assert!(playing.food().is_none());
    }

    #[test]
    fn held_key_turns_once() {
        let mut playing = playing((0.5, 0.5));

        playing.handle_input(&keys(&[Key::D]), 0.016);
        assert_eq!(heading(&playing), Direction::South);
        playing.handle_input(&keys(&[Key::D]), 0.016);
        playing.handle_input(&keys(&[Key::D]), 0.016);
        assert_eq!(heading(&playing), Direction::South);

        playing.handle_input(&keys(&[]), 0.016);
        playing.handle_input(&keys(&[Key::A]), 0.016);
        assert_eq!(heading(&playing), Direction::East);
    }

    #[test]
    fn escape_requests_quit() {
        let mut playing = playing((0.5, 0.5));
        playing.handle_input(&keys(&[Key::Escape]), 0.016);
        match playing.update(0.016) {
            Trans::Quit => {},
            _ => panic!("expected a quit transition"),
        }
    }

    #[test]
    fn food_moves_when_eaten() {
        let display = DisplayConfig::shared(800, 800, 10);
        let layout = CellLayout::attach(&display);
        let length = layout.length();

        struct Sequence(Vec<(f32, f32)>);
        impl FoodSpawner for Sequence {
            fn spawn(&mut self, _: &CellLayout) -> (f32, f32) {
                self.0.remove(0)
            }
        }

        let spawner = Sequence(vec![(length, 0.0), (-0.6, 0.6)]);
        let mut playing = Playing::new(layout, PlayOptions::default(), Box::new(spawner));
        playing.enter();

        playing.update(1.0);
        assert_eq!(playing.snake().map(|s| s.head_position()), Some((length, 0.0)));
        assert_eq!(playing.food().map(|f| f.position()), Some((-0.6, 0.6)));
    }

    #[test]
    fn collision_hook_can_end_the_game() {
        let display = DisplayConfig::shared(800, 800, 10);
        let layout = CellLayout::attach(&display);
        let mut playing = Playing::new(layout, PlayOptions::default(), Box::new(FixedSpawner { x: 0.9, y: 0.9 }))
            .with_collision_check(|snake| {
                if snake.head_position().0 > 0.0 {
                    CollisionOutcome::Terminate
                } else {
                    CollisionOutcome::Continue
                }
            });
        playing.enter();

        assert_eq!(playing.check_collisions(), CollisionOutcome::Continue);
        match playing.update(1.0) {
            Trans::Pop => {},
            _ => panic!("expected the state to pop itself"),
        }
    }

    #[test]
    fn zero_interval_options_fall_back_to_default() {
        let display = DisplayConfig::shared(800, 800, 10);
        let layout = CellLayout::attach(&display);
        let options = PlayOptions { move_interval: 0.0, tick_policy: TickPolicy::CatchUp, ..PlayOptions::default() };
        let mut playing = Playing::new(layout, options, Box::new(FixedSpawner { x: 0.9, y: 0.9 }));
        playing.enter();

        playing.update(0.016);
        assert_eq!(playing.snake().map(|s| s.head_position()), Some((0.0, 0.0)));
        assert_eq!(playing.snake().map(|s| s.move_interval()), Some(DEFAULT_MOVE_INTERVAL));
    }

    #[test]
    fn renders_snake_then_food() {
        let mut playing = playing((0.5, 0.5));
        let mut buffer = DrawBuffer::new();
        playing.render(&mut buffer);

        assert_eq!(buffer.clear_color(), Some(BACKGROUND));
        let commands = buffer.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].quad.points[0].x, 0.0);
        assert_eq!(commands[1].quad.points[0].x, 0.5);
    }
}
