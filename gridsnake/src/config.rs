use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Handle passed to everything that needs screen geometry
pub type SharedDisplay = Rc<RefCell<DisplayConfig>>;

/// Identifies a callback registered with `DisplayConfig::subscribe`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type AspectRatioCallback = Box<dyn FnMut(f32)>;

//
// DisplayConfig

/// Window dimensions, grid resolution and the aspect ratio derived from them.
///
/// This is the only place width/height are stored. Anything that depends on the
/// aspect ratio subscribes here and gets called on every real change.
///
/// Callbacks run while the config is mutably borrowed, so a callback must not
/// touch the config it is subscribed to.
pub struct DisplayConfig {
    width: i32,
    height: i32,
    grid_cell_count: u32,
    aspect_ratio: f32,
    subscribers: Vec<(SubscriptionId, AspectRatioCallback)>,
    next_id: u64,
}

impl DisplayConfig {
    pub fn new(width: i32, height: i32, grid_cell_count: u32) -> Self {
        DisplayConfig {
            width,
            height,
            grid_cell_count,
            aspect_ratio: ratio(width, height),
            subscribers: vec![],
            next_id: 0,
        }
    }

    pub fn shared(width: i32, height: i32, grid_cell_count: u32) -> SharedDisplay {
        Rc::new(RefCell::new(DisplayConfig::new(width, height, grid_cell_count)))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn grid_cell_count(&self) -> u32 {
        self.grid_cell_count
    }

    /// `width / height`. Not finite when height is 0; keeping height non-zero is up to the caller.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Stores new dimensions and notifies every subscriber once, in registration order.
    /// Does nothing if the dimensions are unchanged.
    pub fn set_dimensions(&mut self, width: i32, height: i32) {
        if width == self.width && height == self.height {
            return;
        }

        self.width = width;
        self.height = height;
        self.aspect_ratio = ratio(width, height);
        info!(width, height, aspect_ratio = self.aspect_ratio, "display dimensions changed");

        let aspect_ratio = self.aspect_ratio;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(aspect_ratio);
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
        where F: FnMut(f32) + 'static {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Same as `subscribe`. No deduplication is done.
    pub fn register_aspect_ratio_callback<F>(&mut self, callback: F) -> SubscriptionId
        where F: FnMut(f32) + 'static {
        self.subscribe(callback)
    }

    /// Returns false if the id was never registered or was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

fn ratio(width: i32, height: i32) -> f32 {
    width as f32 / height as f32
}
