//! Decorative background for the home view: a faint grid, a drifting
//! particle field with proximity connections, and a handful of hex-label
//! artifacts rising through the frame.
//!
//! Fully self-contained: nothing here reads or writes interaction state.
//! The field is stepped and painted once per frame while the home view is
//! visible.

use eframe::egui::{self, Color32, Pos2, Rect, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PARTICLE_COUNT: usize = 45;
const ARTIFACT_COUNT: usize = 6;
const CONNECTION_DISTANCE: f32 = 200.0;
const GRID_STEP: f32 = 80.0;
const SPEED_CAP: f32 = 0.35;
const POINTER_RADIUS: f32 = 250.0;
const LAYER_FADE: f32 = 0.4;

/// Deep blues and purples.
const PARTICLE_COLORS: [(u8, u8, u8); 4] = [
    (66, 84, 255),
    (138, 63, 252),
    (43, 45, 124),
    (88, 28, 135),
];

#[derive(Debug, Clone)]
struct Particle {
    pos: Pos2,
    vel: Vec2,
    base_size: f32,
    noise_offset: f32,
    pulse_offset: f32,
    color: (u8, u8, u8),
}

#[derive(Debug, Clone)]
struct Artifact {
    pos: Pos2,
    tag: String,
    opacity: u8,
    speed: f32,
}

#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    artifacts: Vec<Artifact>,
    rng: StdRng,
    frame: u64,
}

impl ParticleField {
    pub fn new(bounds: Rect) -> Self {
        let seed = rand::rng().random();
        Self::with_seed(bounds, seed)
    }

    pub fn with_seed(bounds: Rect, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                pos: random_point(&mut rng, bounds),
                vel: egui::vec2(
                    rng.random_range(-0.15..0.15),
                    rng.random_range(-0.15..0.15),
                ),
                base_size: rng.random_range(0.8..2.5),
                noise_offset: rng.random_range(0.0..2000.0),
                pulse_offset: rng.random_range(0.0..std::f32::consts::TAU),
                color: PARTICLE_COLORS[rng.random_range(0..PARTICLE_COLORS.len())],
            })
            .collect();
        let artifacts = (0..ARTIFACT_COUNT)
            .map(|_| {
                let pos = random_point(&mut rng, bounds);
                random_artifact(&mut rng, pos)
            })
            .collect();
        Self {
            particles,
            artifacts,
            rng,
            frame: 0,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Advances every particle and artifact by one frame.
    pub fn step(&mut self, bounds: Rect, pointer: Option<Pos2>) {
        self.frame = self.frame.wrapping_add(1);
        let t = self.frame as f32 * 0.002;

        for particle in &mut self.particles {
            let angle = flow_angle(particle.pos, t, particle.noise_offset);
            particle.vel += egui::vec2(angle.cos(), angle.sin()) * 0.002;

            if let Some(pointer) = pointer {
                let distance = particle.pos.distance(pointer);
                if distance < POINTER_RADIUS {
                    let force = 0.1 * (1.0 - distance / POINTER_RADIUS);
                    let towards = (pointer - particle.pos).normalized();
                    particle.vel += towards * force;
                }
            }

            let speed = particle.vel.length();
            if speed > SPEED_CAP {
                particle.vel = particle.vel / speed * SPEED_CAP;
            }

            particle.pos += particle.vel;
            particle.pos = wrap(particle.pos, bounds);
        }

        for artifact in &mut self.artifacts {
            artifact.pos.y -= artifact.speed;
            if artifact.pos.y < bounds.top() - 20.0 {
                let x = self.rng.random_range(bounds.left()..bounds.right());
                *artifact = random_artifact(&mut self.rng, egui::pos2(x, bounds.bottom() + 20.0));
            }
        }
    }

    pub fn paint(&self, painter: &egui::Painter, bounds: Rect) {
        let grid_stroke = egui::Stroke::new(
            0.5,
            Color32::from_rgba_unmultiplied(80, 80, 150, 6),
        );
        let mut x = bounds.left();
        while x < bounds.right() {
            painter.line_segment(
                [egui::pos2(x, bounds.top()), egui::pos2(x, bounds.bottom())],
                grid_stroke,
            );
            x += GRID_STEP;
        }
        let mut y = bounds.top();
        while y < bounds.bottom() {
            painter.line_segment(
                [egui::pos2(bounds.left(), y), egui::pos2(bounds.right(), y)],
                grid_stroke,
            );
            y += GRID_STEP;
        }

        for artifact in &self.artifacts {
            painter.text(
                artifact.pos,
                egui::Align2::LEFT_BOTTOM,
                &artifact.tag,
                egui::FontId::monospace(7.0),
                Color32::from_rgba_unmultiplied(100, 120, 255, artifact.opacity)
                    .gamma_multiply(LAYER_FADE),
            );
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.pos.distance(b.pos);
                if distance < CONNECTION_DISTANCE {
                    let alpha = (30.0 * (1.0 - distance / CONNECTION_DISTANCE)) as u8;
                    let (r, g, bl) = a.color;
                    painter.line_segment(
                        [a.pos, b.pos],
                        egui::Stroke::new(
                            0.4,
                            Color32::from_rgba_unmultiplied(r, g, bl, alpha)
                                .gamma_multiply(LAYER_FADE),
                        ),
                    );
                }
            }
        }

        for particle in &self.particles {
            let pulse = (self.frame as f32 * 0.01 + particle.pulse_offset).sin();
            let alpha = (50.0 + pulse * 30.0) as u8;
            let (r, g, b) = particle.color;
            painter.circle_filled(
                particle.pos,
                (particle.base_size + pulse * 0.5).max(0.2) * 0.5,
                Color32::from_rgba_unmultiplied(r, g, b, alpha).gamma_multiply(LAYER_FADE),
            );
        }
    }
}

/// Cheap smooth pseudo-noise standing in for a gradient-noise flow field.
fn flow_angle(pos: Pos2, t: f32, offset: f32) -> f32 {
    let x = pos.x * 0.002 + offset;
    let y = pos.y * 0.002;
    let n = ((x * 1.7 + t).sin() + (y * 2.3 - t * 0.8).cos() + ((x + y) * 1.1).sin()) / 3.0;
    (n * 0.5 + 0.5) * std::f32::consts::TAU * 1.5
}

fn wrap(pos: Pos2, bounds: Rect) -> Pos2 {
    let mut wrapped = pos;
    if wrapped.x < bounds.left() {
        wrapped.x = bounds.right();
    } else if wrapped.x > bounds.right() {
        wrapped.x = bounds.left();
    }
    if wrapped.y < bounds.top() {
        wrapped.y = bounds.bottom();
    } else if wrapped.y > bounds.bottom() {
        wrapped.y = bounds.top();
    }
    wrapped
}

fn random_point(rng: &mut StdRng, bounds: Rect) -> Pos2 {
    egui::pos2(
        rng.random_range(bounds.left()..bounds.right()),
        rng.random_range(bounds.top()..bounds.bottom()),
    )
}

fn random_artifact(rng: &mut StdRng, pos: Pos2) -> Artifact {
    Artifact {
        pos,
        tag: format!("0x{:06X}", rng.random_range(0..0x0100_0000)),
        opacity: rng.random_range(5..20),
        speed: rng.random_range(0.05..0.15),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1280.0, 720.0))
    }

    #[test]
    fn field_populations_are_constant() {
        let mut field = ParticleField::with_seed(bounds(), 7);
        assert_eq!(field.particle_count(), PARTICLE_COUNT);
        assert_eq!(field.artifacts.len(), ARTIFACT_COUNT);
        for _ in 0..500 {
            field.step(bounds(), None);
        }
        assert_eq!(field.particle_count(), PARTICLE_COUNT);
        assert_eq!(field.artifacts.len(), ARTIFACT_COUNT);
    }

    #[test]
    fn particle_speed_never_exceeds_the_cap() {
        let mut field = ParticleField::with_seed(bounds(), 11);
        for _ in 0..500 {
            field.step(bounds(), Some(egui::pos2(640.0, 360.0)));
            for particle in &field.particles {
                assert!(particle.vel.length() <= SPEED_CAP + 1e-4);
            }
        }
    }

    #[test]
    fn particles_stay_inside_the_bounds_via_wrap_around() {
        let mut field = ParticleField::with_seed(bounds(), 23);
        for _ in 0..1000 {
            field.step(bounds(), None);
            for particle in &field.particles {
                assert!(bounds().expand(1.0).contains(particle.pos));
            }
        }
    }

    #[test]
    fn artifacts_recycle_from_the_bottom_after_leaving_the_top() {
        let mut field = ParticleField::with_seed(bounds(), 5);
        for artifact in &mut field.artifacts {
            artifact.pos.y = bounds().top() - 25.0;
        }
        field.step(bounds(), None);
        for artifact in &field.artifacts {
            assert!(artifact.pos.y >= bounds().bottom());
            assert!(artifact.tag.starts_with("0x"));
        }
    }
}
