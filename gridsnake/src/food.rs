use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tetra::graphics::Color;
use crate::cell::GridCell;
use crate::layout::CellLayout;
use crate::rendering::QuadSink;

const FOOD_COLOR: Color = Color::rgb(0.9, 0.2, 0.2);

/// A single stationary target cell
pub struct Food {
    cell: GridCell,
}

impl Food {
    pub fn new(layout: &CellLayout, x: f32, y: f32) -> Self {
        Food {
            cell: GridCell::new(layout, x, y),
        }
    }

    pub fn position(&self) -> (f32, f32) {
        self.cell.position()
    }

    pub fn reposition(&mut self, x: f32, y: f32) {
        self.cell.reposition(x, y);
    }

    pub fn draw(&self, sink: &mut dyn QuadSink) {
        self.cell.draw(sink, FOOD_COLOR);
    }
}

/// Decides where food appears
pub trait FoodSpawner {
    fn spawn(&mut self, layout: &CellLayout) -> (f32, f32);
}

/// Always spawns at the same place
pub struct FixedSpawner {
    pub x: f32,
    pub y: f32,
}

impl FoodSpawner for FixedSpawner {
    fn spawn(&mut self, _: &CellLayout) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Picks a random grid-aligned top-left corner `(-1 + i * length, 1 - j * length)`
pub struct RandomSpawner {
    rng: StdRng,
    grid_cell_count: u32,
}

impl RandomSpawner {
    pub fn new(grid_cell_count: u32) -> Self {
        RandomSpawner {
            rng: StdRng::from_entropy(),
            grid_cell_count,
        }
    }

    pub fn seeded(grid_cell_count: u32, seed: u64) -> Self {
        RandomSpawner {
            rng: StdRng::seed_from_u64(seed),
            grid_cell_count,
        }
    }
}

impl FoodSpawner for RandomSpawner {
    fn spawn(&mut self, layout: &CellLayout) -> (f32, f32) {
        let count = self.grid_cell_count.max(1);
        let i = self.rng.gen_range(0, count);
        let j = self.rng.gen_range(0, count);
        let length = layout.length();
        (-1.0 + i as f32 * length, 1.0 - j as f32 * length)
    }
}
