use crate::core::{Color, ColorStop, Glow, Surface};
use anyhow::anyhow;
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `<canvas>` and its 2D context, used as one render layer.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext(2d) failed: {:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("unexpected context type: {:?}", e))?;
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        Ok(Self {
            canvas,
            ctx,
            width,
            height,
        })
    }

    fn circle(&self, center: DVec2, radius: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        self.ctx.fill();
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        let w = width.max(1.0) as u32;
        let h = height.max(1.0) as u32;
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }
        self.width = w as f64;
        self.height = h as f64;
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color, glow: Option<Glow>) {
        self.ctx.set_fill_style_str(&color.to_css());
        match glow {
            Some(g) => {
                self.ctx.set_shadow_blur(g.blur);
                self.ctx.set_shadow_color(&g.color.to_css());
                self.circle(center, radius);
                self.ctx.set_shadow_blur(0.0);
            }
            None => self.circle(center, radius),
        }
    }

    fn fill_radial(&mut self, center: DVec2, radius: f64, stops: &[ColorStop]) {
        let gradient = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        {
            Ok(g) => g,
            Err(e) => {
                log::error!("[render] radial gradient error: {:?}", e);
                return;
            }
        };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }
}
