//! Decorative canvas scenes. Purely cosmetic: they read nothing from
//! the rest of the app and write nothing back, they just repaint on
//! every animation frame as a function of elapsed time.

mod geometry;

use std::f64::consts::{PI, TAU};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::{html, prelude::*};
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::data::CLOUD_WORDS;
use geometry::{
    cloud_rotation, cube_shell_point, cycling_hue, hero_rotation, hsl_color, project, rotate_x,
    rotate_y, seeded_rng, shell_point, word_bob, Vec3,
};

// Fixed seeds keep the generated geometry identical across page loads.
const HERO_SEED: u64 = 11;
const CLOUD_SEED: u64 = 23;

const INDIGO: &str = "#4f46e5";
const TEAL: &str = "#14b8a6";
const ROSE: &str = "#f43f5e";
const SPHERE_COLOR: &str = "#4338ca";

const SPHERE_RADIUS: f64 = 1.5;
const SPHERE_RINGS: usize = 8;
const SPHERE_SEGMENTS: usize = 16;
const SHARD_COUNT: usize = 20;
const PARTICLE_COUNT: usize = 100;

const HERO_CAMERA_DIST: f64 = 5.0;
const CLOUD_CAMERA_DIST: f64 = 35.0;
// Fog range borrowed from the word cloud's depth fade.
const CLOUD_FOG_FAR: f64 = 80.0;

/// Rotating particle sphere behind the hero copy.
#[component]
pub fn HeroOrbit() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let scene = HeroScene::generate(HERO_SEED);
        start_render_loop(
            canvas,
            Rc::new(move |ctx, time, width, height| scene.draw(ctx, time, width, height)),
        );
    });

    view! { <canvas node_ref=canvas_ref class="w-full h-full" aria-hidden="true"></canvas> }
}

/// Floating cloud of skill labels.
#[component]
pub fn WordCloud() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let scene = CloudScene::generate(CLOUD_SEED);
        start_render_loop(
            canvas,
            Rc::new(move |ctx, time, width, height| scene.draw(ctx, time, width, height)),
        );
    });

    view! { <canvas node_ref=canvas_ref class="w-full h-full" aria-hidden="true"></canvas> }
}

type DrawFn = Rc<dyn Fn(&CanvasRenderingContext2d, f64, f64, f64)>;

fn start_render_loop(canvas: HtmlCanvasElement, draw: DrawFn) {
    let Ok(Some(context)) = canvas.get_context("2d") else {
        return;
    };
    let Ok(ctx) = context.dyn_into::<CanvasRenderingContext2d>() else {
        return;
    };

    // Stop scheduling frames once the component unmounts.
    let running = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let running = running.clone();
        move || running.store(false, Ordering::Relaxed)
    });

    let start = now_ms();
    run_frame(canvas, ctx, draw, start, running);
}

fn run_frame(
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    draw: DrawFn,
    start: f64,
    running: Arc<AtomicBool>,
) {
    request_animation_frame(move || {
        if !running.load(Ordering::Relaxed) {
            return;
        }
        // Match the backing store to the CSS size before drawing.
        let width = canvas.client_width().max(1) as u32;
        let height = canvas.client_height().max(1) as u32;
        if canvas.width() != width {
            canvas.set_width(width);
        }
        if canvas.height() != height {
            canvas.set_height(height);
        }
        let time = (now_ms() - start) / 1000.0;
        draw(&ctx, time, width as f64, height as f64);
        run_frame(canvas, ctx, draw, start, running);
    });
}

fn now_ms() -> f64 {
    window().performance().map(|p| p.now()).unwrap_or_default()
}

fn dot(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
    ctx.begin_path();
    let _ = ctx.arc(x, y, radius, 0.0, TAU);
    ctx.fill();
}

struct Shard {
    pos: Vec3,
    size: f64,
    accent: bool,
}

struct Particle {
    pos: Vec3,
    size: f64,
    warm: bool,
}

struct HeroScene {
    shell: Vec<Vec3>,
    shards: Vec<Shard>,
    particles: Vec<Particle>,
}

impl HeroScene {
    fn generate(seed: u64) -> Self {
        let mut rng = seeded_rng(seed);

        // Lat/long grid standing in for the wireframe sphere.
        let mut shell = Vec::with_capacity(SPHERE_RINGS * SPHERE_SEGMENTS);
        for ring in 0..SPHERE_RINGS {
            let phi = PI * (ring as f64 + 0.5) / SPHERE_RINGS as f64;
            for segment in 0..SPHERE_SEGMENTS {
                let theta = TAU * segment as f64 / SPHERE_SEGMENTS as f64;
                shell.push(Vec3::new(
                    SPHERE_RADIUS * phi.sin() * theta.cos(),
                    SPHERE_RADIUS * phi.cos(),
                    SPHERE_RADIUS * phi.sin() * theta.sin(),
                ));
            }
        }

        let shards = (0..SHARD_COUNT)
            .map(|i| Shard {
                pos: shell_point(&mut rng, 2.5, 1.5),
                size: 0.05 + rng.gen::<f64>() * 0.1,
                accent: i % 2 == 0,
            })
            .collect();

        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let pos = shell_point(&mut rng, 3.0, 3.0);
                let size = 0.01 + rng.gen::<f64>() * 0.03;
                let warm = rng.gen::<f64>() > 0.7;
                Particle { pos, size, warm }
            })
            .collect();

        Self {
            shell,
            shards,
            particles,
        }
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d, time: f64, width: f64, height: f64) {
        ctx.clear_rect(0.0, 0.0, width, height);
        let (yaw, pitch) = hero_rotation(time);
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let focal = height * 0.65;

        let place = |pos: Vec3| {
            let rotated = rotate_x(rotate_y(pos, yaw), pitch);
            project(rotated, HERO_CAMERA_DIST, focal, half_w, half_h)
        };

        // Faint sphere wireframe
        ctx.set_global_alpha(0.15);
        ctx.set_fill_style_str(SPHERE_COLOR);
        for &point in &self.shell {
            if let Some(p) = place(point) {
                dot(ctx, p.x, p.y, (0.015 * p.scale).max(0.5));
            }
        }

        // Accent shards, drawn as small squares
        ctx.set_global_alpha(0.9);
        for shard in &self.shards {
            let Some(p) = place(shard.pos) else {
                continue;
            };
            ctx.set_fill_style_str(if shard.accent { INDIGO } else { TEAL });
            let side = shard.size * p.scale;
            ctx.fill_rect(p.x - side / 2.0, p.y - side / 2.0, side, side);
        }

        // Orbiting particles
        ctx.set_global_alpha(0.7);
        for particle in &self.particles {
            let Some(p) = place(particle.pos) else {
                continue;
            };
            ctx.set_fill_style_str(if particle.warm { ROSE } else { INDIGO });
            dot(ctx, p.x, p.y, (particle.size * p.scale).max(0.4));
        }

        ctx.set_global_alpha(1.0);
    }
}

struct CloudWord {
    label: &'static str,
    pos: Vec3,
    font_scale: f64,
    seed_offset: f64,
}

struct CloudScene {
    words: Vec<CloudWord>,
}

impl CloudScene {
    fn generate(seed: u64) -> Self {
        let mut rng = seeded_rng(seed);
        let words = CLOUD_WORDS
            .iter()
            .map(|label| CloudWord {
                label,
                pos: cube_shell_point(&mut rng, 10.0, 10.0),
                font_scale: rng.gen::<f64>() * 0.5 + 1.0,
                seed_offset: rng.gen::<f64>(),
            })
            .collect();
        Self { words }
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d, time: f64, width: f64, height: f64) {
        ctx.clear_rect(0.0, 0.0, width, height);
        let (sway_x, sway_y) = cloud_rotation(time);
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let focal = half_h;

        ctx.set_text_align("center");
        for word in &self.words {
            let mut pos = word.pos;
            pos.y += word_bob(time, word.seed_offset);
            let rotated = rotate_x(rotate_y(pos, sway_y), sway_x);
            let Some(p) = project(rotated, CLOUD_CAMERA_DIST, focal, half_w, half_h) else {
                continue;
            };

            let px = (word.font_scale * p.scale * 2.0).max(9.0);
            let hue = cycling_hue(time, word.seed_offset);
            ctx.set_font(&format!("{px:.0}px monospace"));
            ctx.set_fill_style_str(&hsl_color(hue, 0.8, 0.5));
            // Depth fade stands in for scene fog.
            ctx.set_global_alpha((1.0 - p.depth / CLOUD_FOG_FAR).clamp(0.05, 1.0));
            let _ = ctx.fill_text(word.label, p.x, p.y);
        }
        ctx.set_global_alpha(1.0);
    }
}
