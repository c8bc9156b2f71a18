use eframe::egui::{Pos2, Vec2};
use rand::Rng;

use super::schedule::{FrameHandle, FrameScheduler};
use super::surface::Surface;
use super::{PointerState, SpiderWeb};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) enum Signal {
    Resized(Vec2),
    PointerMoved(Pos2),
}

pub(in crate::app) fn surface_available(size: Vec2) -> bool {
    size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0
}

/// A spider web bound to a drawing surface.
///
/// Owning a `MountedWeb` is what keeps the resize and pointer listeners and
/// the pending frame alive. `unmount` consumes it and cancels the frame, so
/// nothing can reach the particles once the surface is torn down.
pub(in crate::app) struct MountedWeb {
    web: SpiderWeb,
    pointer: PointerState,
    pending_frame: Option<FrameHandle>,
}

impl MountedWeb {
    pub(in crate::app) fn mount<R: Rng>(
        surface_size: Vec2,
        rng: &mut R,
        scheduler: &mut impl FrameScheduler,
    ) -> Option<Self> {
        if !surface_available(surface_size) {
            log::warn!(
                "drawing surface unavailable ({}x{}), background disabled",
                surface_size.x,
                surface_size.y
            );
            return None;
        }

        let web = SpiderWeb::spawn(surface_size, rng);
        log::debug!(
            "mounted spider web: {} particles on {:.0}x{:.0}",
            web.particles().len(),
            surface_size.x,
            surface_size.y
        );

        Some(Self {
            web,
            pointer: PointerState::default(),
            pending_frame: Some(scheduler.request_frame()),
        })
    }

    pub(in crate::app) fn handle_signal(&mut self, signal: Signal) {
        match signal {
            Signal::Resized(size) => {
                if surface_available(size) {
                    self.web.resize(size);
                }
            }
            Signal::PointerMoved(position) => self.pointer.position = position,
        }
    }

    /// Runs one tick if `handle` is the pending frame, then schedules the next.
    pub(in crate::app) fn run_frame(
        &mut self,
        handle: FrameHandle,
        surface: &mut impl Surface,
        scheduler: &mut impl FrameScheduler,
    ) -> bool {
        if self.pending_frame != Some(handle) {
            return false;
        }

        let ticked = surface_available(surface.size());
        if ticked {
            self.web.tick(&self.pointer, surface);
        }
        self.pending_frame = Some(scheduler.request_frame());
        ticked
    }

    /// Paints the current state again without advancing it.
    pub(in crate::app) fn redraw(&self, surface: &mut impl Surface) -> bool {
        let drawn = surface_available(surface.size());
        if drawn {
            self.web.render(surface);
        }
        drawn
    }

    pub(in crate::app) fn unmount(mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending_frame.take() {
            scheduler.cancel_frame(handle);
        }
        log::debug!("unmounted spider web");
    }

    #[cfg(test)]
    pub(in crate::app) fn web(&self) -> &SpiderWeb {
        &self.web
    }

    #[cfg(test)]
    pub(in crate::app) fn pointer(&self) -> PointerState {
        self.pointer
    }
}
