use std::collections::HashSet;
use gridsnake::prelude::*;
use gridsnake::rendering::DrawBuffer;
use gridsnake::tetra::input::Key;
use gridsnake::{CellLayout, Direction, DisplayConfig, FixedSpawner, Playing, PlayOptions, TickPolicy};

const EPSILON: f32 = 1e-6;

fn frame(stack: &mut GameStateStack, buffer: &mut DrawBuffer, held: &[Key], delta_time: f32) {
    let keys: HashSet<Key> = held.iter().cloned().collect();
    stack.handle_input(&keys, delta_time);
    stack.update(delta_time);
    stack.render(buffer);
}

#[test]
fn snake_turns_and_moves_at_tick_boundaries() {
    let display = DisplayConfig::shared(800, 800, 30);
    let layout = CellLayout::attach(&display);
    let length = layout.length();

    let mut stack = GameStateStack::new();
    stack.push_state(Box::new(Playing::new(layout, PlayOptions::default(), Box::new(FixedSpawner { x: 0.9, y: 0.9 }))));
    let mut buffer = DrawBuffer::new();

    // 60 frames of a held turn key: one turn, one move
    for _ in 0..60 {
        frame(&mut stack, &mut buffer, &[Key::A], 1.0 / 60.0);
    }
    frame(&mut stack, &mut buffer, &[], 0.01);

    let head = buffer.commands()[0].quad.points[0];
    assert!(head.x.abs() < EPSILON);
    assert!((head.y - length).abs() < EPSILON);
    assert_eq!(buffer.commands().len(), 2);
}

#[test]
fn resizing_keeps_cells_square_on_screen() {
    let display = DisplayConfig::shared(800, 800, 30);
    let layout = CellLayout::attach(&display);

    let mut stack = GameStateStack::new();
    stack.push_state(Box::new(Playing::new(layout, PlayOptions::default(), Box::new(FixedSpawner { x: 0.5, y: 0.5 }))));
    let mut buffer = DrawBuffer::new();

    for &(w, h) in &[(800, 800), (1600, 800), (600, 900)] {
        display.borrow_mut().set_dimensions(w, h);
        frame(&mut stack, &mut buffer, &[], 0.0);

        let screen = buffer.commands()[0].quad.to_screen(w as f32, h as f32);
        let width = screen[1].x - screen[0].x;
        let height = screen[3].y - screen[0].y;
        assert!((width - height).abs() < 1e-3, "{}x{}: {} vs {}", w, h, width, height);
    }
}

#[test]
fn escape_surfaces_as_a_quit_request() {
    let display = DisplayConfig::shared(800, 800, 30);
    let layout = CellLayout::attach(&display);

    let mut stack = GameStateStack::new();
    stack.push_state(Box::new(Playing::new(layout, PlayOptions::default(), Box::new(FixedSpawner { x: 0.5, y: 0.5 }))));
    let mut buffer = DrawBuffer::new();

    frame(&mut stack, &mut buffer, &[], 0.1);
    assert!(!stack.quit_requested());
    frame(&mut stack, &mut buffer, &[Key::Escape], 0.1);
    assert!(stack.quit_requested());
    assert_eq!(stack.len(), 1);
}

#[test]
fn catch_up_option_reaches_playing_snake() {
    let display = DisplayConfig::shared(800, 800, 10);
    let layout = CellLayout::attach(&display);
    let options = PlayOptions { tick_policy: TickPolicy::CatchUp, move_interval: 0.5, ..PlayOptions::default() };
    let mut playing = Playing::new(layout.clone(), options, Box::new(FixedSpawner { x: 0.9, y: 0.9 }));

    playing.enter();
    playing.update(1.6);

    let snake = playing.snake().unwrap();
    assert_eq!(snake.current_direction(), Direction::East);
    assert!((snake.head_position().0 - 3.0 * layout.length()).abs() < 1e-5);
}
