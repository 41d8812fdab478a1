// File: crates/scope-core/src/interaction.rs
// Summary: Scroll/drag gesture state for the selected trace (scale levels and offsets).

use crate::error::{Result, ScopeError};
use crate::geometry::Point;
use crate::trace::Trace;
use crate::types::SCROLL_TIMEOUT_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Pointer button number; 1 is the primary button.
pub type Button = u32;
pub const PRIMARY_BUTTON: Button = 1;

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragOrigin {
    trace_offset: Point,
    pointer: Point,
}

/// Tracks which trace gestures act on, the scroll debounce clock and any drag in progress.
#[derive(Clone, Debug, Default)]
pub struct ScopeController {
    selected: usize,
    last_scroll_ms: Option<u64>,
    drag: Option<DragOrigin>,
}

impl ScopeController {
    pub fn new() -> Self { Self::default() }

    pub fn selected(&self) -> usize { self.selected }

    pub fn is_dragging(&self) -> bool { self.drag.is_some() }

    pub fn select(&mut self, index: usize, traces: &[Trace]) -> Result<()> {
        if index >= traces.len() {
            return Err(ScopeError::TraceIndexOutOfRange { index, len: traces.len() });
        }
        self.selected = index;
        self.drag = None;
        Ok(())
    }

    /// Apply a scroll step unless it arrives within the debounce window of
    /// the last accepted one. Returns whether the event was applied.
    ///
    /// Vertical scrolls rescale the selected trace's y axis; horizontal
    /// scrolls set every trace's x level from the selected trace's level.
    pub fn scroll(&mut self, direction: ScrollDirection, time_ms: u64, traces: &mut [Trace]) -> bool {
        if let Some(last) = self.last_scroll_ms {
            if time_ms.saturating_sub(last) <= SCROLL_TIMEOUT_MS {
                return false;
            }
        }
        let Some(sel) = traces.get_mut(self.selected) else {
            log::warn!("scroll ignored: no trace at index {}", self.selected);
            return false;
        };
        match direction {
            ScrollDirection::Up => sel.scale_y = sel.scale_y.up(),
            ScrollDirection::Down => sel.scale_y = sel.scale_y.down(),
            ScrollDirection::Left | ScrollDirection::Right => {
                let level = if direction == ScrollDirection::Left {
                    sel.scale_x.up()
                } else {
                    sel.scale_x.down()
                };
                for t in traces.iter_mut() {
                    t.scale_x = level;
                }
            }
        }
        self.last_scroll_ms = Some(time_ms);
        log::debug!("scroll {:?} accepted at {} ms", direction, time_ms);
        true
    }

    pub fn button_press(&mut self, button: Button, pointer: Point, traces: &[Trace]) {
        if button != PRIMARY_BUTTON {
            return;
        }
        if let Some(sel) = traces.get(self.selected) {
            self.drag = Some(DragOrigin { trace_offset: sel.offset, pointer });
        }
    }

    /// Move the selected trace with the pointer while a drag is active.
    /// Returns whether a trace moved.
    pub fn motion(&mut self, pointer: Point, traces: &mut [Trace]) -> bool {
        let Some(origin) = self.drag else { return false };
        match traces.get_mut(self.selected) {
            Some(sel) => {
                sel.offset = origin.trace_offset + (pointer - origin.pointer);
                true
            }
            None => false,
        }
    }

    pub fn button_release(&mut self, button: Button) {
        if button == PRIMARY_BUTTON {
            self.drag = None;
        }
    }
}
