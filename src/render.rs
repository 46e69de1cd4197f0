use prank_core::constants::AMBIENT_RGB;
use prank_core::{AmbientField, ConfettiField, Shape};
use std::f64::consts::TAU;
use web_sys as web;

/// A 2D canvas and its context, sized to the viewport.
pub struct Layer {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl Layer {
    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}

pub fn draw_ambient(layer: &Layer, field: &AmbientField) {
    layer.clear();
    let ctx = &layer.ctx;
    let [r, g, b] = AMBIENT_RGB;
    for p in field.particles() {
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.size as f64, 0.0, TAU);
        ctx.set_fill_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, p.opacity));
        ctx.fill();
    }
}

pub fn draw_confetti(layer: &Layer, field: &ConfettiField) {
    layer.clear();
    let ctx = &layer.ctx;
    for p in field.particles() {
        let size = p.size as f64;
        ctx.save();
        _ = ctx.translate(p.pos.x as f64, p.pos.y as f64);
        _ = ctx.rotate((p.rotation_deg as f64).to_radians());
        ctx.set_global_alpha(p.opacity.max(0.0) as f64);
        ctx.set_fill_style_str(p.color.unwrap_or("#ffffff"));
        match p.shape {
            Shape::Rect => ctx.fill_rect(-size / 2.0, -size / 4.0, size, size / 2.0),
            Shape::Circle => {
                ctx.begin_path();
                _ = ctx.arc(0.0, 0.0, size / 2.0, 0.0, TAU);
                ctx.fill();
            }
        }
        ctx.restore();
    }
}
