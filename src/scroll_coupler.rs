//! Reciprocal scroll relay between the ruler, the track list and the keyframe area.
//!
//! The keyframe area is the hub. Its horizontal offset is paired with the
//! ruler and its vertical offset with the track list; the ruler and the track
//! list are never linked to each other.
//!
//! A relay cycle runs in three steps:
//! 1. [`ScrollCoupler::on_scroll`] takes the guard and queues writes for the peers.
//! 2. The next [`ScrollCoupler::on_frame`] applies the writes through each
//!    peer's [`ScrollHandle`].
//! 3. The frame after that releases the guard. Scroll events caused by our own
//!    writes arrive in between and are swallowed.
//!
//! Events that arrive under the guard but do not match what the coupler wrote
//! are real user input. The latest one per pane is replayed as soon as the
//! guard drops, and a queued write to that pane on the moved axis is dropped so
//! the user's offset wins.

/// One independently scrollable region of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Ruler,
    TrackList,
    KeyframeList,
}

impl Pane {
    pub const ALL: [Pane; 3] = [Pane::Ruler, Pane::TrackList, Pane::KeyframeList];

    /// Returns true if the pane has a horizontal offset.
    pub fn scrolls_horizontally(self) -> bool {
        matches!(self, Pane::Ruler | Pane::KeyframeList)
    }

    /// Returns true if the pane has a vertical offset.
    pub fn scrolls_vertically(self) -> bool {
        matches!(self, Pane::TrackList | Pane::KeyframeList)
    }

    /// Panes that follow this one on the given axis.
    fn peers(self, axis: Axis) -> &'static [Pane] {
        match (self, axis) {
            (Pane::Ruler, Axis::Horizontal) => &[Pane::KeyframeList],
            (Pane::TrackList, Axis::Vertical) => &[Pane::KeyframeList],
            (Pane::KeyframeList, Axis::Horizontal) => &[Pane::Ruler],
            (Pane::KeyframeList, Axis::Vertical) => &[Pane::TrackList],
            _ => &[],
        }
    }

    fn axes(self) -> impl Iterator<Item = Axis> {
        [Axis::Horizontal, Axis::Vertical]
            .into_iter()
            .filter(move |axis| match axis {
                Axis::Horizontal => self.scrolls_horizontally(),
                Axis::Vertical => self.scrolls_vertically(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Scroll position of a pane in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub left: u32,
    pub top: u32,
}

impl ScrollOffset {
    pub fn new(left: u32, top: u32) -> Self {
        Self { left, top }
    }

    fn on_axis(self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    fn set_axis(&mut self, axis: Axis, px: u32) {
        match axis {
            Axis::Horizontal => self.left = px,
            Axis::Vertical => self.top = px,
        }
    }
}

/// Write capability a pane exposes to the coupler.
///
/// The pane keeps ownership of its real offset; axes it does not scroll on
/// can ignore the call.
pub trait ScrollHandle {
    fn set_scroll_left(&mut self, px: u32);
    fn set_scroll_top(&mut self, px: u32);
}

/// Lookup of pane handles by identity, provided by the host each frame.
pub trait PaneHandles {
    fn pane_mut(&mut self, pane: Pane) -> Option<&mut dyn ScrollHandle>;
}

/// A scroll offset the coupler writes into a pane on its peer's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWrite {
    pub pane: Pane,
    pub axis: Axis,
    pub px: u32,
}

/// What [`ScrollCoupler::on_scroll`] did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// A relay cycle started
    Relayed,
    /// Feedback from our own write; dropped
    Echo,
    /// Real input under the guard; replayed after release
    Deferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Guard {
    Idle,
    /// Writes queued, applied at the next frame
    Scheduled,
    /// Writes applied, released at the next frame
    Settling,
}

/// Relay between the three panes with a per-cycle reentrancy guard.
#[derive(Debug, Clone)]
pub struct ScrollCoupler {
    guard: Guard,
    origin: Option<(Pane, ScrollOffset)>,
    pending: Vec<ScrollWrite>,
    written: Vec<ScrollWrite>,
    /// Latest user input per pane received under the guard
    deferred: Vec<(Pane, ScrollOffset)>,
    /// Shared offsets of the pane group
    group: ScrollOffset,
    /// Group offsets before the current cycle started
    previous_group: ScrollOffset,
}

impl Default for ScrollCoupler {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollCoupler {
    pub fn new() -> Self {
        Self {
            guard: Guard::Idle,
            origin: None,
            pending: Vec::new(),
            written: Vec::new(),
            deferred: Vec::new(),
            group: ScrollOffset::default(),
            previous_group: ScrollOffset::default(),
        }
    }

    // ===== Queries =====

    /// Horizontal offset shared by the ruler and the keyframe area.
    pub fn scroll_left(&self) -> u32 {
        self.group.left
    }

    /// Vertical offset shared by the track list and the keyframe area.
    pub fn scroll_top(&self) -> u32 {
        self.group.top
    }

    /// Returns true while a relay cycle holds the guard.
    pub fn is_relaying(&self) -> bool {
        self.guard != Guard::Idle
    }

    /// Writes waiting for the next frame.
    pub fn pending_writes(&self) -> &[ScrollWrite] {
        &self.pending
    }

    // ===== Events =====

    /// Handles a scroll event reported by `source`.
    ///
    /// Only the axes `source` actually scrolls on are read from `offset`.
    pub fn on_scroll(&mut self, source: Pane, offset: ScrollOffset) -> RelayOutcome {
        if self.guard != Guard::Idle {
            if self.is_echo(source, offset) {
                log::trace!("Swallowed echo from {source:?} at {offset:?}");
                return RelayOutcome::Echo;
            }
            self.defer(source, offset);
            return RelayOutcome::Deferred;
        }

        self.guard = Guard::Scheduled;
        self.origin = Some((source, offset));
        self.pending.clear();
        self.written.clear();
        self.previous_group = self.group;

        for axis in source.axes() {
            let px = offset.on_axis(axis);
            match axis {
                Axis::Horizontal => self.group.left = px,
                Axis::Vertical => self.group.top = px,
            }
            for &pane in source.peers(axis) {
                self.pending.push(ScrollWrite { pane, axis, px });
            }
        }
        log::trace!("Relaying {source:?} at {offset:?}: {:?}", self.pending);
        RelayOutcome::Relayed
    }

    /// Schedules a programmatic move of every pane to `offset`.
    ///
    /// Uses the same guarded path as a user relay, so the resulting scroll
    /// events do not bounce back. Replaces any cycle in progress.
    pub fn schedule_sync(&mut self, offset: ScrollOffset) {
        self.guard = Guard::Scheduled;
        self.origin = None;
        self.deferred.clear();
        self.written.clear();
        self.previous_group = self.group;
        self.group = offset;
        self.pending = Pane::ALL
            .iter()
            .flat_map(|&pane| {
                pane.axes().map(move |axis| ScrollWrite {
                    pane,
                    axis,
                    px: offset.on_axis(axis),
                })
            })
            .collect();
        log::debug!("Scheduled sync of all panes to {offset:?}");
    }

    /// Advances the relay at a paint boundary.
    ///
    /// Applies queued writes, or releases the guard one frame after they were
    /// applied and replays any deferred input.
    pub fn on_frame(&mut self, panes: &mut dyn PaneHandles) {
        match self.guard {
            Guard::Idle => {}
            Guard::Scheduled => {
                for write in self.pending.drain(..) {
                    if let Some(handle) = panes.pane_mut(write.pane) {
                        match write.axis {
                            Axis::Horizontal => handle.set_scroll_left(write.px),
                            Axis::Vertical => handle.set_scroll_top(write.px),
                        }
                    }
                    self.written.push(write);
                }
                self.guard = Guard::Settling;
            }
            Guard::Settling => {
                self.guard = Guard::Idle;
                self.origin = None;
                self.written.clear();
                // The first replay starts a cycle; the rest queue up behind it.
                for (source, offset) in std::mem::take(&mut self.deferred) {
                    self.on_scroll(source, offset);
                }
            }
        }
    }

    /// Remembers user input that arrived under the guard.
    ///
    /// On each axis the pane either still reports a known value, or the old
    /// group value because our queued write has not landed yet, or a value of
    /// its own. Only the last case is user movement: the queued write to that
    /// pane and axis is dropped, and the replay relays the user's value.
    fn defer(&mut self, source: Pane, offset: ScrollOffset) {
        let mut replay = offset;
        for axis in source.axes() {
            let px = offset.on_axis(axis);
            let known = self.known_px(source, axis);
            let queued = self.pending.iter().any(|w| w.pane == source && w.axis == axis);

            if px == known || (queued && px == self.previous_group.on_axis(axis)) {
                replay.set_axis(axis, known);
            } else if queued {
                log::trace!("Dropping queued {axis:?} write to {source:?}, user moved it to {px}");
                self.pending.retain(|w| !(w.pane == source && w.axis == axis));
            }
        }

        log::trace!("Deferred {source:?} scroll to {replay:?}");
        match self.deferred.iter_mut().find(|(pane, _)| *pane == source) {
            Some(slot) => slot.1 = replay,
            None => self.deferred.push((source, replay)),
        }
    }

    /// An event is an echo when every axis of the pane matches a value the
    /// current cycle started from or wrote, or the group offset on axes the
    /// cycle did not touch.
    fn is_echo(&self, pane: Pane, offset: ScrollOffset) -> bool {
        pane.axes().all(|axis| self.known_px(pane, axis) == offset.on_axis(axis))
    }

    /// The offset the current cycle expects `pane` to report on `axis`.
    fn known_px(&self, pane: Pane, axis: Axis) -> u32 {
        let origin_px = self
            .origin
            .filter(|(origin, _)| *origin == pane)
            .map(|(_, origin_offset)| origin_offset.on_axis(axis));
        let written_px = self
            .written
            .iter()
            .chain(self.pending.iter())
            .rev()
            .find(|w| w.pane == pane && w.axis == axis)
            .map(|w| w.px);

        written_px
            .or(origin_px)
            .unwrap_or_else(|| self.group.on_axis(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPane {
        offset: ScrollOffset,
        writes: usize,
    }

    impl ScrollHandle for MockPane {
        fn set_scroll_left(&mut self, px: u32) {
            self.offset.left = px;
            self.writes += 1;
        }

        fn set_scroll_top(&mut self, px: u32) {
            self.offset.top = px;
            self.writes += 1;
        }
    }

    #[derive(Default)]
    struct MockPanes {
        ruler: MockPane,
        track_list: MockPane,
        keyframes: MockPane,
    }

    impl PaneHandles for MockPanes {
        fn pane_mut(&mut self, pane: Pane) -> Option<&mut dyn ScrollHandle> {
            Some(match pane {
                Pane::Ruler => &mut self.ruler,
                Pane::TrackList => &mut self.track_list,
                Pane::KeyframeList => &mut self.keyframes,
            })
        }
    }

    #[test]
    fn test_ruler_drives_keyframes_horizontally() {
        let mut coupler = ScrollCoupler::new();
        let mut panes = MockPanes::default();

        assert_eq!(coupler.on_scroll(Pane::Ruler, ScrollOffset::new(150, 0)), RelayOutcome::Relayed);
        assert_eq!(panes.keyframes.offset.left, 0);

        coupler.on_frame(&mut panes);
        assert_eq!(panes.keyframes.offset.left, 150);
        assert_eq!(panes.track_list.writes, 0);
        assert_eq!(coupler.scroll_left(), 150);
    }

    #[test]
    fn test_track_list_drives_keyframes_vertically() {
        let mut coupler = ScrollCoupler::new();
        let mut panes = MockPanes::default();

        coupler.on_scroll(Pane::TrackList, ScrollOffset::new(0, 120));
        coupler.on_frame(&mut panes);
        assert_eq!(panes.keyframes.offset.top, 120);
        assert_eq!(panes.ruler.writes, 0);
        assert_eq!(coupler.scroll_top(), 120);
    }

    #[test]
    fn test_keyframes_drive_both_peers() {
        let mut coupler = ScrollCoupler::new();
        let mut panes = MockPanes::default();

        coupler.on_scroll(Pane::KeyframeList, ScrollOffset::new(200, 80));
        coupler.on_frame(&mut panes);
        assert_eq!(panes.ruler.offset.left, 200);
        assert_eq!(panes.track_list.offset.top, 80);
        assert_eq!(panes.keyframes.writes, 0);
    }

    #[test]
    fn test_echo_is_swallowed_and_guard_released() {
        let mut coupler = ScrollCoupler::new();
        let mut panes = MockPanes::default();

        coupler.on_scroll(Pane::Ruler, ScrollOffset::new(150, 0));
        coupler.on_frame(&mut panes);

        // Our write to the keyframe list fires its own scroll event.
        assert_eq!(coupler.on_scroll(Pane::KeyframeList, ScrollOffset::new(150, 0)), RelayOutcome::Echo);
        assert!(coupler.is_relaying());

        coupler.on_frame(&mut panes);
        assert!(!coupler.is_relaying());
        assert_eq!(panes.ruler.writes, 0);
    }

    #[test]
    fn test_input_under_guard_is_replayed() {
        let mut coupler = ScrollCoupler::new();
        let mut panes = MockPanes::default();

        coupler.on_scroll(Pane::Ruler, ScrollOffset::new(100, 0));
        coupler.on_frame(&mut panes);
        assert_eq!(coupler.on_scroll(Pane::Ruler, ScrollOffset::new(130, 0)), RelayOutcome::Deferred);
        assert_eq!(coupler.on_scroll(Pane::Ruler, ScrollOffset::new(160, 0)), RelayOutcome::Deferred);

        coupler.on_frame(&mut panes); // release, replay 160
        assert!(coupler.is_relaying());
        coupler.on_frame(&mut panes); // apply
        assert_eq!(panes.keyframes.offset.left, 160);
        coupler.on_frame(&mut panes);
        assert!(!coupler.is_relaying());
    }

    #[test]
    fn test_simultaneous_input_on_both_panes_converges() {
        let mut coupler = ScrollCoupler::new();
        let mut panes = MockPanes::default();

        panes.ruler.offset.left = 100;
        coupler.on_scroll(Pane::Ruler, ScrollOffset::new(100, 0));
        // The keyframe list moves on its own before the relay lands.
        panes.keyframes.offset.left = 50;
        assert_eq!(coupler.on_scroll(Pane::KeyframeList, ScrollOffset::new(50, 0)), RelayOutcome::Deferred);
        assert!(coupler.pending_writes().is_empty());

        for _ in 0..4 {
            coupler.on_frame(&mut panes);
        }
        assert!(!coupler.is_relaying());
        assert_eq!(panes.keyframes.writes, 0);
        assert_eq!(panes.ruler.offset.left, 50);
        assert_eq!(panes.keyframes.offset.left, 50);
        assert_eq!(coupler.scroll_left(), 50);
    }

    #[test]
    fn test_deferred_input_keeps_queued_write_on_other_axis() {
        let mut coupler = ScrollCoupler::new();
        let mut panes = MockPanes::default();

        panes.track_list.offset.top = 120;
        coupler.on_scroll(Pane::TrackList, ScrollOffset::new(0, 120));
        // Horizontal move on the keyframe list; its top still shows the old value.
        panes.keyframes.offset.left = 70;
        assert_eq!(coupler.on_scroll(Pane::KeyframeList, ScrollOffset::new(70, 0)), RelayOutcome::Deferred);

        for _ in 0..4 {
            coupler.on_frame(&mut panes);
        }
        assert!(!coupler.is_relaying());
        assert_eq!(panes.keyframes.offset, ScrollOffset::new(70, 120));
        assert_eq!(panes.ruler.offset.left, 70);
        assert_eq!(panes.track_list.offset.top, 120);
    }

    #[test]
    fn test_deferred_input_from_two_panes_is_not_lost() {
        let mut coupler = ScrollCoupler::new();
        let mut panes = MockPanes::default();

        coupler.on_scroll(Pane::KeyframeList, ScrollOffset::new(40, 0));
        coupler.on_frame(&mut panes);
        assert_eq!(coupler.on_scroll(Pane::Ruler, ScrollOffset::new(90, 0)), RelayOutcome::Deferred);
        assert_eq!(coupler.on_scroll(Pane::TrackList, ScrollOffset::new(0, 30)), RelayOutcome::Deferred);
        panes.ruler.offset.left = 90;
        panes.track_list.offset.top = 30;

        for _ in 0..8 {
            coupler.on_frame(&mut panes);
        }
        assert!(!coupler.is_relaying());
        assert_eq!(panes.keyframes.offset, ScrollOffset::new(90, 30));
    }

    #[test]
    fn test_repeated_origin_event_is_echo() {
        let mut coupler = ScrollCoupler::new();
        coupler.on_scroll(Pane::TrackList, ScrollOffset::new(0, 40));
        assert_eq!(coupler.on_scroll(Pane::TrackList, ScrollOffset::new(0, 40)), RelayOutcome::Echo);
    }

    #[test]
    fn test_reverse_direction() {
        let mut coupler = ScrollCoupler::new();
        let mut panes = MockPanes::default();

        coupler.on_scroll(Pane::KeyframeList, ScrollOffset::new(150, 0));
        coupler.on_frame(&mut panes);
        coupler.on_frame(&mut panes);
        assert_eq!(panes.ruler.offset.left, 150);

        coupler.on_scroll(Pane::KeyframeList, ScrollOffset::new(150, 120));
        coupler.on_frame(&mut panes);
        assert_eq!(panes.track_list.offset.top, 120);
    }

    #[test]
    fn test_schedule_sync_moves_every_pane() {
        let mut coupler = ScrollCoupler::new();
        let mut panes = MockPanes::default();
        panes.keyframes.offset = ScrollOffset::new(10, 10);

        coupler.schedule_sync(ScrollOffset::default());
        assert_eq!(coupler.pending_writes().len(), 4);
        coupler.on_frame(&mut panes);

        assert_eq!(panes.keyframes.offset, ScrollOffset::default());
        assert_eq!(panes.ruler.writes, 1);
        assert_eq!(panes.track_list.writes, 1);
        assert_eq!(coupler.on_scroll(Pane::KeyframeList, ScrollOffset::default()), RelayOutcome::Echo);
    }
}
