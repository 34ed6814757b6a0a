//! Placement and projection math for the decorative scenes.
//!
//! Everything here is pure: placement is a function of a seeded RNG and
//! per-frame pose is a function of elapsed time, so frames are
//! reproducible and the formulas are testable off-screen.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn scaled(self, k: f64) -> Self {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }

    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            // degenerate direction, point it somewhere
            Vec3::new(0.0, 0.0, 1.0)
        } else {
            self.scaled(1.0 / len)
        }
    }
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Uniform point on a spherical shell with radius in
/// `[min_radius, min_radius + spread]`.
pub fn shell_point(rng: &mut SmallRng, min_radius: f64, spread: f64) -> Vec3 {
    let theta = rng.gen::<f64>() * TAU;
    let phi = (2.0 * rng.gen::<f64>() - 1.0).acos();
    let radius = min_radius + rng.gen::<f64>() * spread;
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Random direction sampled from the unit cube, pushed out to a shell of
/// radius `[base, base + spread]`. This is how the word cloud scatters
/// its labels.
pub fn cube_shell_point(rng: &mut SmallRng, base: f64, spread: f64) -> Vec3 {
    let direction = Vec3::new(
        rng.gen::<f64>() * 2.0 - 1.0,
        rng.gen::<f64>() * 2.0 - 1.0,
        rng.gen::<f64>() * 2.0 - 1.0,
    );
    direction.normalized().scaled(base + rng.gen::<f64>() * spread)
}

pub fn rotate_y(v: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

pub fn rotate_x(v: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// World-to-pixel factor at the point's depth.
    pub scale: f64,
    /// Distance from the camera along the view axis.
    pub depth: f64,
}

/// Perspective projection onto a canvas centered at `(half_w, half_h)`.
/// The camera sits at `+camera_dist` on the z axis looking at the
/// origin; `focal` converts world units to pixels at the origin plane.
/// Points at or behind the camera are culled.
pub fn project(v: Vec3, camera_dist: f64, focal: f64, half_w: f64, half_h: f64) -> Option<Projected> {
    let depth = camera_dist - v.z;
    if depth <= 0.1 {
        return None;
    }
    let scale = focal / depth;
    Some(Projected {
        x: half_w + v.x * scale,
        y: half_h - v.y * scale,
        scale,
        depth,
    })
}

/// Hero group pose: slow constant yaw with a gentle pitch wobble.
pub fn hero_rotation(time: f64) -> (f64, f64) {
    let yaw = time * 0.1;
    let pitch = (time * 0.05).sin() * 0.05;
    (yaw, pitch)
}

/// Word-cloud group sway on two axes.
pub fn cloud_rotation(time: f64) -> (f64, f64) {
    ((time / 20.0).sin() * 0.1, (time / 15.0).sin() * 0.1)
}

/// Per-word vertical bob, phase-shifted by the word's seed offset.
pub fn word_bob(time: f64, seed_offset: f64) -> f64 {
    (time / 2.0 + seed_offset * 1000.0).sin() * 0.3
}

/// Hue cycle in `[0, 1]` used by the word cloud.
pub fn cycling_hue(time: f64, seed_offset: f64) -> f64 {
    (time / 10.0 + seed_offset * 10.0).sin() * 0.5 + 0.5
}

pub fn hsl_color(hue: f64, saturation: f64, lightness: f64) -> String {
    format!(
        "hsl({:.0}, {:.0}%, {:.0}%)",
        hue * 360.0,
        saturation * 100.0,
        lightness * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn shell_points_stay_within_radius_bounds() {
        let mut rng = seeded_rng(7);
        for _ in 0..1000 {
            let radius = shell_point(&mut rng, 2.5, 1.5).length();
            assert!((2.5..=4.0 + EPSILON).contains(&radius), "radius {radius}");
        }
    }

    #[test]
    fn cube_shell_points_stay_within_radius_bounds() {
        let mut rng = seeded_rng(7);
        for _ in 0..1000 {
            let radius = cube_shell_point(&mut rng, 10.0, 10.0).length();
            assert!((10.0 - EPSILON..=20.0 + EPSILON).contains(&radius), "radius {radius}");
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_placement() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        for _ in 0..100 {
            assert_eq!(shell_point(&mut a, 3.0, 3.0), shell_point(&mut b, 3.0, 3.0));
        }
    }

    #[test]
    fn rotations_preserve_length() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        let len = v.length();
        assert!((rotate_y(v, 1.3).length() - len).abs() < EPSILON);
        assert!((rotate_x(v, -0.7).length() - len).abs() < EPSILON);
    }

    #[test]
    fn full_turn_is_identity() {
        let v = Vec3::new(0.5, 1.5, -2.5);
        let turned = rotate_y(v, TAU);
        assert!((turned.x - v.x).abs() < EPSILON);
        assert!((turned.z - v.z).abs() < EPSILON);
    }

    #[test]
    fn origin_projects_to_canvas_center() {
        let p = project(Vec3::new(0.0, 0.0, 0.0), 5.0, 300.0, 400.0, 300.0)
            .expect("origin is in front of the camera");
        assert!((p.x - 400.0).abs() < EPSILON);
        assert!((p.y - 300.0).abs() < EPSILON);
        assert!((p.depth - 5.0).abs() < EPSILON);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        assert!(project(Vec3::new(0.0, 0.0, 6.0), 5.0, 300.0, 400.0, 300.0).is_none());
        assert!(project(Vec3::new(0.0, 0.0, 5.0), 5.0, 300.0, 400.0, 300.0).is_none());
    }

    #[test]
    fn closer_points_project_larger() {
        let near = project(Vec3::new(0.0, 0.0, 2.0), 5.0, 300.0, 400.0, 300.0).unwrap();
        let far = project(Vec3::new(0.0, 0.0, -2.0), 5.0, 300.0, 400.0, 300.0).unwrap();
        assert!(near.scale > far.scale);
    }

    #[test]
    fn hue_cycle_stays_normalized() {
        for i in 0..500 {
            let hue = cycling_hue(i as f64 * 0.37, 0.83);
            assert!((0.0..=1.0).contains(&hue));
        }
    }

    #[test]
    fn hsl_color_formats_css_values() {
        assert_eq!(hsl_color(0.5, 0.8, 0.5), "hsl(180, 80%, 50%)");
    }

    #[test]
    fn pose_curves_are_pure_functions_of_time() {
        assert_eq!(hero_rotation(12.5), hero_rotation(12.5));
        assert_eq!(cloud_rotation(3.25), cloud_rotation(3.25));
        assert_eq!(word_bob(8.0, 0.4), word_bob(8.0, 0.4));
    }
}
