use crate::anim::{ScheduleError, Scheduler};
use gtk::prelude::*;
use gtk4 as gtk;
use std::time::Duration;

const WINDOWED_SIZE: (i32, i32) = (480, 800);

pub fn init_window(window: &gtk::ApplicationWindow, windowed: bool) {
    if windowed {
        window.set_default_size(WINDOWED_SIZE.0, WINDOWED_SIZE.1);
    } else {
        window.fullscreen();
    }
}

/// Books redraws of a drawing area on the gtk main loop.
#[derive(Clone, Default)]
pub struct GtkScheduler {
    area: glib::WeakRef<gtk::DrawingArea>,
}

impl GtkScheduler {
    pub fn attach(&self, area: &gtk::DrawingArea) {
        self.area.set(Some(area));
    }
}

impl Scheduler for GtkScheduler {
    fn redraw_now(&self) {
        if let Some(area) = self.area.upgrade() {
            area.queue_draw();
        }
    }

    fn redraw_after(&self, delay: Duration) -> Result<(), ScheduleError> {
        let area = self.area.upgrade().ok_or(ScheduleError::TargetGone)?;
        let weak = area.downgrade();
        glib::timeout_add_local_once(delay, move || {
            if let Some(area) = weak.upgrade() {
                area.queue_draw();
            }
        });
        Ok(())
    }
}
