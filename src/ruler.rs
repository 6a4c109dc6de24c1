//! Pointer tracking on the ruler bar.
//!
//! A press on the bar starts a drag session and moves the playhead to the
//! pointer. While the session lasts, pointer moves anywhere in the window keep
//! moving it, throttled to one update per interval. A release anywhere ends
//! the session.

use crate::clock::TimelineClock;
use crate::quantize::round_to_ten;
use crate::throttle::Throttle;

/// Where the ruler bar currently sits on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerGeometry {
    /// Screen x of the bar's left edge (already shifted by the ruler's scroll)
    pub bar_left: f32,
    /// The bar's own horizontal scroll offset
    pub bar_scroll_left: f32,
}

impl RulerGeometry {
    pub fn new(bar_left: f32) -> Self {
        Self {
            bar_left,
            bar_scroll_left: 0.0,
        }
    }

    /// Converts a pointer x into a quantized time (1px = 1ms).
    pub fn time_at(&self, client_x: f32) -> i64 {
        let relative_x = client_x - self.bar_left + self.bar_scroll_left;
        round_to_ten(relative_x as f64).unwrap_or(0)
    }
}

/// Time under the pointer, or 0 when the bar has not been laid out yet.
pub fn time_from_pointer(client_x: f32, geometry: Option<RulerGeometry>) -> i64 {
    geometry.map_or(0, |geometry| geometry.time_at(client_x))
}

/// Drag session on the ruler bar.
#[derive(Debug, Clone)]
pub struct RulerPointerTracker {
    dragging: bool,
    throttle: Throttle<i64>,
}

impl RulerPointerTracker {
    /// Creates a tracker that limits drag updates to one per `interval` seconds.
    pub fn new(interval: f64) -> Self {
        Self {
            dragging: false,
            throttle: Throttle::new(interval),
        }
    }

    /// Returns true while a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts a drag session and moves the playhead to the pointer.
    ///
    /// # Returns
    /// The time submitted to the clock
    pub fn pointer_down(
        &mut self,
        clock: &mut TimelineClock,
        client_x: f32,
        geometry: Option<RulerGeometry>,
    ) -> i64 {
        self.dragging = true;
        self.throttle.reset();

        let time = time_from_pointer(client_x, geometry);
        log::trace!("Ruler press at x={client_x} -> {time}");
        clock.set_time(time as f64);
        time
    }

    /// Follows the pointer during a drag session.
    ///
    /// Ignored outside a session. Updates inside the throttle window are held
    /// back and only the latest survives.
    ///
    /// # Returns
    /// The time submitted to the clock, if any
    pub fn pointer_move(
        &mut self,
        clock: &mut TimelineClock,
        client_x: f32,
        geometry: Option<RulerGeometry>,
        now: f64,
    ) -> Option<i64> {
        if !self.dragging {
            return None;
        }
        let time = time_from_pointer(client_x, geometry);
        let submitted = self.throttle.submit(now, time)?;
        clock.set_time(submitted as f64);
        Some(submitted)
    }

    /// Delivers a held-back drag update once its window has passed.
    pub fn poll(&mut self, clock: &mut TimelineClock, now: f64) -> Option<i64> {
        if !self.dragging {
            return None;
        }
        let submitted = self.throttle.poll(now)?;
        clock.set_time(submitted as f64);
        Some(submitted)
    }

    /// Ends the drag session. Held-back updates are dropped.
    ///
    /// # Returns
    /// `true` if a session was active
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = std::mem::take(&mut self.dragging);
        self.throttle.reset();
        if was_dragging {
            log::trace!("Ruler drag ended");
        }
        was_dragging
    }
}
