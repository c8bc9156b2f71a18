mod lifecycle;
mod schedule;
mod surface;

use eframe::egui::{Pos2, Vec2, pos2, vec2};
use rand::Rng;

use super::render_utils::web_color;

pub(in crate::app) use lifecycle::{MountedWeb, Signal, surface_available};
pub(in crate::app) use schedule::RepaintScheduler;
pub(in crate::app) use surface::{PainterSurface, Surface};

pub(in crate::app) const PARTICLE_COUNT: usize = 50;
const MAX_INITIAL_SPEED: f32 = 0.25;
const POINTER_RADIUS: f32 = 150.0;
const POINTER_PULL: f32 = 0.000_05;
const LINK_DISTANCE: f32 = 100.0;
const LINK_MAX_OPACITY: f32 = 0.2;
const LINK_WIDTH: f32 = 1.0;
const PARTICLE_RADIUS: f32 = 2.0;
const PARTICLE_OPACITY: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct Particle {
    pub(in crate::app) position: Pos2,
    pub(in crate::app) velocity: Vec2,
}

/// Last known pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(in crate::app) struct PointerState {
    pub(in crate::app) position: Pos2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct Link {
    pub(in crate::app) from: usize,
    pub(in crate::app) to: usize,
    pub(in crate::app) opacity: f32,
}

pub(in crate::app) struct SpiderWeb {
    particles: Vec<Particle>,
    size: Vec2,
}

impl SpiderWeb {
    pub(in crate::app) fn spawn<R: Rng>(size: Vec2, rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                position: pos2(
                    rng.gen_range(0.0_f32..1.0) * size.x,
                    rng.gen_range(0.0_f32..1.0) * size.y,
                ),
                velocity: vec2(
                    rng.gen_range(-MAX_INITIAL_SPEED..MAX_INITIAL_SPEED),
                    rng.gen_range(-MAX_INITIAL_SPEED..MAX_INITIAL_SPEED),
                ),
            })
            .collect();

        Self { particles, size }
    }

    #[cfg(test)]
    pub(in crate::app) fn from_particles(particles: Vec<Particle>, size: Vec2) -> Self {
        Self { particles, size }
    }

    pub(in crate::app) fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(in crate::app) fn size(&self) -> Vec2 {
        self.size
    }

    pub(in crate::app) fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    pub(in crate::app) fn step(&mut self, pointer: &PointerState) {
        let Vec2 {
            x: width,
            y: height,
        } = self.size;

        for particle in &mut self.particles {
            particle.position += particle.velocity;

            if particle.position.x < 0.0 || particle.position.x > width {
                particle.velocity.x = -particle.velocity.x;
            }
            if particle.position.y < 0.0 || particle.position.y > height {
                particle.velocity.y = -particle.velocity.y;
            }

            let delta = pointer.position - particle.position;
            if delta.length() < POINTER_RADIUS {
                particle.velocity += delta * POINTER_PULL;
            }
        }
    }

    pub(in crate::app) fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let particles = &self.particles;
        (0..particles.len()).flat_map(move |from| {
            ((from + 1)..particles.len()).filter_map(move |to| {
                let distance = particles[from].position.distance(particles[to].position);
                link_opacity(distance).map(|opacity| Link { from, to, opacity })
            })
        })
    }

    pub(in crate::app) fn render(&self, surface: &mut impl Surface) {
        surface.clear();

        for link in self.links() {
            surface.stroke_line(
                self.particles[link.from].position,
                self.particles[link.to].position,
                web_color(link.opacity),
                LINK_WIDTH,
            );
        }

        let fill = web_color(PARTICLE_OPACITY);
        for particle in &self.particles {
            surface.fill_disk(particle.position, PARTICLE_RADIUS, fill);
        }
    }

    pub(in crate::app) fn tick(&mut self, pointer: &PointerState, surface: &mut impl Surface) {
        self.step(pointer);
        self.render(surface);
    }
}

fn link_opacity(distance: f32) -> Option<f32> {
    (distance < LINK_DISTANCE)
        .then(|| ((LINK_DISTANCE - distance) / LINK_DISTANCE) * LINK_MAX_OPACITY)
}
