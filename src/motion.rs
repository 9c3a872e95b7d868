//! Pointer- and clock-driven decoration. Everything here ends up in a
//! `transform` or `background` declaration so updates never touch layout.

use crate::signal::PointerSample;

pub fn spotlight(sample: PointerSample, radius_px: u32, rgba: &str, fade_pct: u8) -> String {
    format!(
        "background: radial-gradient({radius_px}px circle at {:.1}px {:.1}px, {rgba}, transparent {fade_pct}%);",
        sample.x, sample.y
    )
}

/// 3D tilt from a centred sample. `pitch` scales the vertical axis into
/// `rotateX`, `yaw` the horizontal axis into `rotateY`.
pub fn tilt(centered: PointerSample, pitch: f64, yaw: f64) -> String {
    format!(
        "transform: rotateX({:.2}deg) rotateY({:.2}deg); transform-style: preserve-3d;",
        centered.y * pitch,
        centered.x * yaw
    )
}

pub fn parallax(offset: PointerSample, divisor: f64) -> String {
    if divisor == 0.0 {
        return "transform: translate(0px, 0px);".to_string();
    }
    format!(
        "transform: translate({:.2}px, {:.2}px);",
        offset.x / divisor,
        offset.y / divisor
    )
}

pub fn drift(centered: PointerSample, factor: f64) -> String {
    format!(
        "transform: translate({:.2}px, {:.2}px);",
        centered.x * factor,
        centered.y * factor
    )
}

pub fn kinetic_background(centered: PointerSample, seconds: f64, enabled: bool) -> String {
    let (rotate_x, rotate_y) = if enabled {
        (
            centered.y * 5.0 + (seconds * 0.5).sin() * 2.0,
            centered.x * 5.0 + (seconds * 0.5).cos() * 2.0,
        )
    } else {
        (0.0, 0.0)
    };

    format!(
        "transform: translateZ(-200px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) scale(1.3);"
    )
}

pub fn floating_words(centered: PointerSample, seconds: f64) -> String {
    format!(
        "transform: translateZ(-300px) rotateY({:.2}deg) translateY({:.2}px);",
        centered.x * -10.0 + (seconds * 0.4).sin() * 5.0,
        centered.y * 20.0 + (seconds * 0.4).cos() * 10.0
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleSize {
    Large,
    Medium,
    Small,
    Wide,
}

impl ParticleSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Large => "particle-dot particle-dot--large",
            Self::Medium => "particle-dot particle-dot--medium",
            Self::Small => "particle-dot particle-dot--small",
            Self::Wide => "particle-dot particle-dot--wide",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub top_pct: u32,
    pub left_pct: u32,
    pub delay_s: f64,
    pub duration_s: u32,
    pub divisor: f64,
    pub size: ParticleSize,
}

impl Particle {
    pub fn anchor_style(&self) -> String {
        format!(
            "top: {}%; left: {}%; animation-delay: {:.1}s; animation-duration: {}s;",
            self.top_pct, self.left_pct, self.delay_s, self.duration_s
        )
    }
}

pub fn particle_field(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let index = u32::try_from(i).unwrap_or(u32::MAX);
            Particle {
                top_pct: index.wrapping_mul(7) % 100,
                left_pct: index.wrapping_mul(13) % 100,
                delay_s: f64::from(index) * 0.2,
                duration_s: 8 + index % 12,
                divisor: 100.0 + f64::from(index),
                size: match i % 4 {
                    0 => ParticleSize::Large,
                    1 => ParticleSize::Medium,
                    2 => ParticleSize::Small,
                    _ => ParticleSize::Wide,
                },
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Frame,
    Ring,
    Tile,
}

impl ShapeKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Frame => "hero-shape hero-shape--frame",
            Self::Ring => "hero-shape hero-shape--ring",
            Self::Tile => "hero-shape hero-shape--tile",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub top_pct: u32,
    pub left_pct: u32,
    pub divisor: f64,
    pub rotation_deg: u32,
    pub kind: ShapeKind,
}

impl FloatingShape {
    pub fn style(&self, offset: PointerSample) -> String {
        format!(
            "top: {}%; left: {}%; transform: translate({:.2}px, {:.2}px) rotate({}deg);",
            self.top_pct,
            self.left_pct,
            offset.x / self.divisor,
            offset.y / self.divisor,
            self.rotation_deg
        )
    }
}

pub fn geometric_shapes(count: usize) -> Vec<FloatingShape> {
    (0..count)
        .map(|i| {
            let index = u32::try_from(i).unwrap_or(u32::MAX);
            FloatingShape {
                top_pct: 15 + index.wrapping_mul(12) % 70,
                left_pct: 10 + index.wrapping_mul(15) % 80,
                divisor: 30.0 + f64::from(index) * 5.0,
                rotation_deg: index.wrapping_mul(45) % 360,
                kind: match i % 3 {
                    0 => ShapeKind::Frame,
                    1 => ShapeKind::Ring,
                    _ => ShapeKind::Tile,
                },
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavParticle {
    pub left_pct: u32,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl NavParticle {
    pub fn style(&self) -> String {
        format!(
            "left: {}%; animation-delay: {:.1}s; animation-duration: {:.1}s;",
            self.left_pct, self.delay_s, self.duration_s
        )
    }
}

/// Fixed scatter for the navbar sparkles; stable across renders.
pub fn nav_particles(count: usize) -> Vec<NavParticle> {
    (0..count)
        .map(|i| {
            let index = u32::try_from(i).unwrap_or(u32::MAX);
            NavParticle {
                left_pct: index.wrapping_mul(37).wrapping_add(11) % 100,
                delay_s: f64::from(index) * 0.8,
                duration_s: 4.0 + f64::from(index.wrapping_mul(53) % 20) / 10.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spotlight_tracks_pixel_offset() {
        let style = spotlight(
            PointerSample { x: 120.0, y: 48.5 },
            600,
            "rgba(139, 92, 246, 0.06)",
            40,
        );
        assert_eq!(
            style,
            "background: radial-gradient(600px circle at 120.0px 48.5px, rgba(139, 92, 246, 0.06), transparent 40%);"
        );
    }

    #[test]
    fn tilt_scales_each_axis() {
        let style = tilt(PointerSample { x: 0.5, y: -0.25 }, 20.0, 20.0);
        assert!(style.starts_with("transform: rotateX(-5.00deg) rotateY(10.00deg);"));
    }

    #[test]
    fn parallax_guards_zero_divisor() {
        assert_eq!(
            parallax(PointerSample { x: 10.0, y: 10.0 }, 0.0),
            "transform: translate(0px, 0px);"
        );
        assert_eq!(
            parallax(PointerSample { x: 200.0, y: -100.0 }, 100.0),
            "transform: translate(2.00px, -1.00px);"
        );
    }

    #[test]
    fn kinetic_background_is_flat_when_disabled() {
        let style = kinetic_background(PointerSample { x: 0.4, y: 0.4 }, 12.0, false);
        assert_eq!(
            style,
            "transform: translateZ(-200px) rotateX(0.00deg) rotateY(0.00deg) scale(1.3);"
        );
    }

    #[test]
    fn floating_words_rest_on_clock_phase() {
        let style = floating_words(PointerSample::default(), 0.0);
        assert_eq!(
            style,
            "transform: translateZ(-300px) rotateY(0.00deg) translateY(10.00px);"
        );
    }

    #[test]
    fn particle_field_is_deterministic() {
        let first = particle_field(30);
        let second = particle_field(30);
        assert_eq!(first, second);
        assert_eq!(first.len(), 30);
        assert_eq!(first[3].top_pct, 21);
        assert_eq!(first[3].left_pct, 39);
        assert_eq!(first[3].size, ParticleSize::Wide);
        assert_eq!(first[13].duration_s, 9);
    }

    #[test]
    fn shapes_and_nav_particles_stay_in_bounds() {
        for shape in geometric_shapes(8) {
            assert!((15..85).contains(&shape.top_pct));
            assert!((10..90).contains(&shape.left_pct));
        }
        for particle in nav_particles(4) {
            assert!(particle.left_pct < 100);
            assert!((4.0..6.0).contains(&particle.duration_s));
        }
    }
}
