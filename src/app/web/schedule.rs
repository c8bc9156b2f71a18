use eframe::egui::Context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) struct FrameHandle(pub(super) u64);

pub(in crate::app) trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Schedules frames by asking egui for another repaint.
///
/// At most one frame is pending; `take_due` hands it to the caller at the
/// start of the next `update`. A cancelled frame is never handed out.
pub(in crate::app) struct RepaintScheduler {
    ctx: Context,
    last_id: u64,
    pending: Option<FrameHandle>,
}

impl RepaintScheduler {
    pub(in crate::app) fn new(ctx: Context) -> Self {
        Self {
            ctx,
            last_id: 0,
            pending: None,
        }
    }

    pub(in crate::app) fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for RepaintScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.last_id += 1;
        let handle = FrameHandle(self.last_id);
        self.pending = Some(handle);
        self.ctx.request_repaint();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_frame_is_never_due() {
        let mut scheduler = RepaintScheduler::new(Context::default());
        let handle = scheduler.request_frame();
        scheduler.cancel_frame(handle);
        assert_eq!(scheduler.take_due(), None);
    }

    #[test]
    fn only_latest_request_is_pending() {
        let mut scheduler = RepaintScheduler::new(Context::default());
        let first = scheduler.request_frame();
        let second = scheduler.request_frame();
        assert_ne!(first, second);

        scheduler.cancel_frame(first);
        assert_eq!(scheduler.take_due(), Some(second));
        assert_eq!(scheduler.take_due(), None);
    }
}
