use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use crate::config::{DisplayConfig, SharedDisplay, SubscriptionId};

struct Geometry {
    length: f32,
    offset: Cell<f32>,
    display: Weak<RefCell<DisplayConfig>>,
    subscription: Cell<Option<SubscriptionId>>,
}

impl Drop for Geometry {
    fn drop(&mut self) {
        if let (Some(display), Some(id)) = (self.display.upgrade(), self.subscription.take()) {
            if let Ok(mut display) = display.try_borrow_mut() {
                display.unsubscribe(id);
            }
        }
    }
}

/// Edge length and horizontal offset shared by every cell built from the same layout.
///
/// `length` is fixed from the grid resolution. `offset` is `length / aspect_ratio`
/// and is kept current through a display config subscription, so cells render as
/// squares whatever the window shape. Cloning is cheap and clones share state.
#[derive(Clone)]
pub struct CellLayout {
    geometry: Rc<Geometry>,
}

impl CellLayout {
    /// Subscribes to `display` for aspect ratio changes until the last clone is dropped.
    pub fn attach(display: &SharedDisplay) -> Self {
        let (length, aspect_ratio) = {
            let config = display.borrow();
            (2.0 / config.grid_cell_count() as f32, config.aspect_ratio())
        };

        let geometry = Rc::new(Geometry {
            length,
            offset: Cell::new(length / aspect_ratio),
            display: Rc::downgrade(display),
            subscription: Cell::new(None),
        });

        let weak = Rc::downgrade(&geometry);
        let id = display.borrow_mut().subscribe(move |aspect_ratio| {
            if let Some(geometry) = weak.upgrade() {
                geometry.offset.set(geometry.length / aspect_ratio);
            }
        });
        geometry.subscription.set(Some(id));

        CellLayout { geometry }
    }

    /// Vertical edge, also the distance the snake moves per tick.
    pub fn length(&self) -> f32 {
        self.geometry.length
    }

    /// Horizontal edge after aspect correction.
    pub fn offset(&self) -> f32 {
        self.geometry.offset.get()
    }
}
