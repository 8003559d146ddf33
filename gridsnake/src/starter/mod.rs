use tetra::{ window, Context, ContextBuilder, Event, State };
use tetra::time::{ self, Timestep };
use tracing::{info, warn};
use crate::config::{DisplayConfig, SharedDisplay};
use crate::error::{GameError, Result};
use crate::layout::CellLayout;
use crate::rendering::DrawBuffer;
use crate::settings::Settings;
use crate::state::{GameState, GameStateStack};

//
// Game

/// Window setup plus the initial state
pub struct Game {
    pub settings: Settings,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        Game { settings }
    }

    pub fn set_window_size(&mut self, width: i32, height: i32) -> &mut Self {
        self.settings.window_width = width;
        self.settings.window_height = height;
        self
    }

    /// Opens the window and runs frames until it closes or the state stack asks to stop.
    ///
    /// `initial` receives the settings and the cell layout attached to the window's display config.
    pub fn launch<F>(&self, initial: F) -> Result
        where F: FnOnce(&Settings, CellLayout) -> Box<dyn GameState> {
        self.settings.validate()?;
        let settings = &self.settings;

        info!(title = %settings.title, width = settings.window_width, height = settings.window_height, "creating window");
        ContextBuilder::new(&settings.title, settings.window_width, settings.window_height)
            .resizable(true)
            .quit_on_escape(false)
            .timestep(Timestep::Variable)
            .build()?
            .run(|_| {
                let display = DisplayConfig::shared(settings.window_width, settings.window_height, settings.grid_cell_count);
                let layout = CellLayout::attach(&display);
                Ok(FrameDriver::new(display, initial(settings, layout)))
            })
    }
}

//
// FrameDriver

/// Runs the state stack once per frame and keeps the display config in step with the window
pub struct FrameDriver {
    display: SharedDisplay,
    states: GameStateStack,
    draw_buffer: DrawBuffer,
}

impl FrameDriver {
    pub fn new(display: SharedDisplay, initial: Box<dyn GameState>) -> Self {
        let mut states = GameStateStack::new();
        states.push_state(initial);
        FrameDriver { display, states, draw_buffer: DrawBuffer::new() }
    }

    /// Applies a new window size. Sizes with a zero or negative side are ignored.
    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        if width <= 0 || height <= 0 {
            warn!(width, height, "ignoring degenerate window size");
            return false;
        }
        self.display.borrow_mut().set_dimensions(width, height);
        true
    }

    pub fn should_close(&self) -> bool {
        self.states.quit_requested() || self.states.is_empty()
    }

    pub fn states(&self) -> &GameStateStack {
        &self.states
    }
}

impl State<GameError> for FrameDriver {
    fn update(&mut self, ctx: &mut Context) -> Result {
        let delta_time = time::get_delta_time(ctx).as_secs_f32();

        self.states.handle_input(&*ctx, delta_time);
        self.states.update(delta_time);

        if self.should_close() {
            info!("closing window");
            window::quit(ctx);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        self.states.render(&mut self.draw_buffer);

        let (width, height) = {
            let display = self.display.borrow();
            (display.width() as f32, display.height() as f32)
        };
        self.draw_buffer.flush(ctx, width, height)?;
        Ok(())
    }

    fn event(&mut self, _: &mut Context, event: Event) -> Result {
        if let Event::Resized { width, height } = event {
            self.resize(width, height);
        }
        Ok(())
    }
}
