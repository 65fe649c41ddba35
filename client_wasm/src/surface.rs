//! Canvas 2D implementation of the game's drawing surface

use game_core::{Color, Surface};
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.set_font(font);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
