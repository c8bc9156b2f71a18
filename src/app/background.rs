use eframe::egui::{Context, Event, LayerId, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::render_utils::draw_backdrop;
use super::web::{MountedWeb, PainterSurface, RepaintScheduler, Signal, surface_available};

enum WebState {
    Unmounted,
    Mounted(MountedWeb),
    Refused { size: Vec2 },
}

/// Animated spider-web layer painted behind every panel.
pub(super) struct Background {
    scheduler: RepaintScheduler,
    rng: StdRng,
    state: WebState,
    last_size: Vec2,
}

impl Background {
    pub(super) fn new(ctx: Context, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            scheduler: RepaintScheduler::new(ctx),
            rng,
            state: WebState::Unmounted,
            last_size: Vec2::ZERO,
        }
    }

    pub(super) fn show(&mut self, ctx: &Context, animated: bool) {
        let screen = ctx.content_rect();
        let painter = ctx.layer_painter(LayerId::background());

        if !animated {
            self.unmount();
            draw_backdrop(&painter, screen);
            return;
        }

        let size = screen.size();
        let retry = match &self.state {
            WebState::Unmounted => true,
            WebState::Refused { size: refused } => *refused != size && surface_available(size),
            WebState::Mounted(_) => false,
        };
        if retry {
            self.state = match MountedWeb::mount(size, &mut self.rng, &mut self.scheduler) {
                Some(mounted) => WebState::Mounted(mounted),
                None => WebState::Refused { size },
            };
            self.last_size = size;
        }

        let WebState::Mounted(mounted) = &mut self.state else {
            draw_backdrop(&painter, screen);
            return;
        };

        for signal in collect_signals(ctx, &mut self.last_size, size) {
            mounted.handle_signal(signal);
        }

        let mut surface = PainterSurface::new(&painter);
        let drawn = if ctx.current_pass_index() > 0 {
            mounted.redraw(&mut surface)
        } else {
            match self.scheduler.take_due() {
                Some(handle) => mounted.run_frame(handle, &mut surface, &mut self.scheduler),
                None => false,
            }
        };
        if !drawn {
            draw_backdrop(&painter, screen);
        }
    }

    fn unmount(&mut self) {
        if let WebState::Mounted(mounted) = std::mem::replace(&mut self.state, WebState::Unmounted)
        {
            mounted.unmount(&mut self.scheduler);
        }
    }
}

fn collect_signals(ctx: &Context, last_size: &mut Vec2, size: Vec2) -> Vec<Signal> {
    let mut signals = Vec::new();
    if *last_size != size {
        *last_size = size;
        signals.push(Signal::Resized(size));
    }

    ctx.input(|input| {
        for event in &input.events {
            if let Event::PointerMoved(position) = event {
                signals.push(Signal::PointerMoved(*position));
            }
        }
    });

    signals
}
