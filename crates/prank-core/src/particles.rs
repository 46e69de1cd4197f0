//! Two particle fields: a slow ambient drift behind every screen and the
//! confetti used by the reveal.
//!
//! Both fields are stepped once per animation frame. All velocities are in
//! pixels per frame, rotations in degrees.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Rect,
    Circle,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius for ambient particles, edge length for confetti.
    pub size: f32,
    pub opacity: f32,
    pub rotation_deg: f32,
    pub spin_deg: f32,
    pub color: Option<&'static str>,
    pub shape: Shape,
}

/// Number of ambient particles for a canvas of the given size.
#[inline]
pub fn ambient_count(width: f32, height: f32) -> usize {
    ((width.max(0.0) * height.max(0.0)) / AMBIENT_AREA_PER_PARTICLE).floor() as usize
}

/// Background drift. Particles wrap around the edges and never expire.
pub struct AmbientField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl AmbientField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.reseed();
        field
    }

    /// Adopt a new canvas size and regenerate the particles to match it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.reseed();
    }

    fn reseed(&mut self) {
        let count = ambient_count(self.width, self.height);
        let (w, h) = (self.width.max(1.0), self.height.max(1.0));
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 0.3,
                    (rng.gen::<f32>() - 0.5) * 0.3,
                ),
                size: rng.gen::<f32>() * 2.0 + 0.5,
                opacity: rng.gen::<f32>() * 0.5 + 0.1,
                rotation_deg: 0.0,
                spin_deg: 0.0,
                color: None,
                shape: Shape::Circle,
            })
            .collect();
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 {
                p.pos.x = w;
            }
            if p.pos.x > w {
                p.pos.x = 0.0;
            }
            if p.pos.y < 0.0 {
                p.pos.y = h;
            }
            if p.pos.y > h {
                p.pos.y = 0.0;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Celebration confetti with gravity, horizontal drag and a linear fade.
///
/// The field is "animating" while it holds particles. Stepping an empty field
/// turns animation off; any spawn turns it back on, so the host can skip the
/// canvas entirely between celebrations.
pub struct ConfettiField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    animating: bool,
    spawned: u64,
    rng: StdRng,
}

impl ConfettiField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            width,
            height,
            particles: Vec::new(),
            animating: false,
            spawned: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Spawn `count` particles at one point, thrown outward with an upward bias.
    pub fn burst(&mut self, x: f32, y: f32, count: usize) {
        let palette_len = CONFETTI_PALETTE.len();
        for _ in 0..count {
            let rng = &mut self.rng;
            let p = Particle {
                pos: Vec2::new(x, y),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 20.0,
                    (rng.gen::<f32>() - 0.5) * 20.0 - 10.0,
                ),
                size: rng.gen::<f32>() * 10.0 + 5.0,
                opacity: 1.0,
                rotation_deg: rng.gen::<f32>() * 360.0,
                spin_deg: (rng.gen::<f32>() - 0.5) * 15.0,
                color: Some(CONFETTI_PALETTE[rng.gen_range(0..palette_len)]),
                shape: if rng.gen::<f32>() > 0.3 {
                    Shape::Rect
                } else {
                    Shape::Circle
                },
            };
            self.push(p);
        }
    }

    /// One wave of rain: a few particles just above the top edge drifting down.
    pub fn rain_wave(&mut self) {
        let palette_len = CONFETTI_PALETTE.len();
        let w = self.width.max(1.0);
        for _ in 0..CONFETTI_RAIN_PER_TICK {
            let rng = &mut self.rng;
            let p = Particle {
                pos: Vec2::new(rng.gen::<f32>() * w, CONFETTI_RAIN_SPAWN_Y),
                vel: Vec2::new((rng.gen::<f32>() - 0.5) * 4.0, rng.gen::<f32>() * 3.0 + 2.0),
                size: rng.gen::<f32>() * 8.0 + 4.0,
                opacity: 1.0,
                rotation_deg: rng.gen::<f32>() * 360.0,
                spin_deg: (rng.gen::<f32>() - 0.5) * 10.0,
                color: Some(CONFETTI_PALETTE[rng.gen_range(0..palette_len)]),
                shape: if rng.gen::<f32>() > 0.5 {
                    Shape::Rect
                } else {
                    Shape::Circle
                },
            };
            self.push(p);
        }
    }

    fn push(&mut self, p: Particle) {
        self.particles.push(p);
        self.spawned += 1;
        self.animating = true;
    }

    /// Advance one frame. Returns whether the field is still animating.
    pub fn step(&mut self) -> bool {
        let floor = self.height + CONFETTI_FLOOR_MARGIN;
        self.particles.retain_mut(|p| {
            p.pos += p.vel;
            p.vel.y += CONFETTI_GRAVITY;
            p.vel.x *= CONFETTI_DRAG;
            p.rotation_deg += p.spin_deg;
            p.opacity -= CONFETTI_FADE;
            p.opacity > 0.0 && p.pos.y <= floor
        });
        if self.particles.is_empty() {
            self.animating = false;
        }
        self.animating
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Total particles spawned since construction.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}

/// Number of rain waves issued for a rain of `duration_ms`.
#[inline]
pub fn rain_waves(duration_ms: u64) -> u64 {
    duration_ms / CONFETTI_RAIN_INTERVAL_MS
}
