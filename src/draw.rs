//! Raster primitives on top of `image::RgbaImage`.
//!
//! Every write replaces the destination pixel, alpha included. Nothing is blended,
//! so a translucent shape drawn over an opaque one leaves a translucent hole.
//! All writes are clipped to the canvas.

use image::{Rgba, RgbaImage};

pub type Point = (i32, i32);

/// Inclusive pixel bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    /// Box of an ellipse centered on `(cx, cy)` with semi-axes `rx`, `ry`
    pub fn around(cx: i32, cy: i32, rx: i32, ry: i32) -> Self {
        BBox {
            x0: cx - rx,
            y0: cy - ry,
            x1: cx + rx,
            y1: cy + ry,
        }
    }

    /// True if the whole box lies inside a `size`x`size` canvas
    pub fn within(&self, size: u32) -> bool {
        let size = size as i64;
        self.x0 <= self.x1
            && self.y0 <= self.y1
            && self.x0 >= 0
            && self.y0 >= 0
            && (self.x1 as i64) < size
            && (self.y1 as i64) < size
    }

    /// Intersection with the canvas, as inclusive pixel ranges
    fn clip(&self, img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
        let max_x = img.width() as i64 - 1;
        let max_y = img.height() as i64 - 1;
        let x0 = (self.x0 as i64).max(0);
        let y0 = (self.y0 as i64).max(0);
        let x1 = (self.x1 as i64).min(max_x);
        let y1 = (self.y1 as i64).min(max_y);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub color: Rgba<u8>,
    pub width: u32,
}

/// A single drawing instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Ellipse {
        bbox: BBox,
        fill: Rgba<u8>,
        outline: Option<Outline>,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba<u8>,
        width: u32,
    },
}

impl Shape {
    /// Every pixel the shape can touch lies inside this box
    pub fn bounds(&self) -> BBox {
        match *self {
            Shape::Ellipse { bbox, .. } => bbox,
            Shape::Line { from, to, width, .. } => line_bounds(from, to, width),
        }
    }

    pub fn paint(&self, img: &mut RgbaImage) {
        match *self {
            Shape::Ellipse { bbox, fill, outline } => fill_ellipse(img, bbox, fill, outline),
            Shape::Line {
                from,
                to,
                color,
                width,
            } => draw_line(img, from, to, color, width),
        }
    }
}

fn inside_ellipse(dx: f64, dy: f64, rx: f64, ry: f64) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let nx = dx / rx;
    let ny = dy / ry;
    nx * nx + ny * ny <= 1.0
}

/// Fill the ellipse inscribed in `bbox`, optionally with an inset outline.
///
/// A pixel belongs to the ellipse when its center does. Outline pixels are the ones
/// outside the ellipse shrunk by `outline.width` on both semi-axes.
pub fn fill_ellipse(img: &mut RgbaImage, bbox: BBox, fill: Rgba<u8>, outline: Option<Outline>) {
    let Some((x0, y0, x1, y1)) = bbox.clip(img) else {
        return;
    };

    let cx = (bbox.x0 as f64 + bbox.x1 as f64 + 1.0) / 2.0;
    let cy = (bbox.y0 as f64 + bbox.y1 as f64 + 1.0) / 2.0;
    let rx = (bbox.x1 - bbox.x0 + 1) as f64 / 2.0;
    let ry = (bbox.y1 - bbox.y0 + 1) as f64 / 2.0;

    for py in y0..=y1 {
        for px in x0..=x1 {
            let dx = px as f64 + 0.5 - cx;
            let dy = py as f64 + 0.5 - cy;
            if !inside_ellipse(dx, dy, rx, ry) {
                continue;
            }

            let color = match outline {
                Some(o) => {
                    let w = o.width as f64;
                    if inside_ellipse(dx, dy, rx - w, ry - w) {
                        fill
                    } else {
                        o.color
                    }
                }
                None => fill,
            };
            img.put_pixel(px, py, color);
        }
    }
}

fn line_bounds(from: Point, to: Point, width: u32) -> BBox {
    // Conservative for diagonals, exact enough for the axis-aligned hands
    let pad = width.div_ceil(2) as i32;
    BBox {
        x0: from.0.min(to.0) - pad,
        y0: from.1.min(to.1) - pad,
        x1: from.0.max(to.0) + pad,
        y1: from.1.max(to.1) + pad,
    }
}

/// Draw a straight segment `width` pixels thick with flat ends.
///
/// Pixel `p` is covered when its projection falls on the segment (ends included)
/// and its signed perpendicular offset `o` satisfies `-width/2 <= o < width/2`.
/// A zero-length segment covers a `width`x`width` square.
pub fn draw_line(img: &mut RgbaImage, from: Point, to: Point, color: Rgba<u8>, width: u32) {
    let Some((x0, y0, x1, y1)) = line_bounds(from, to, width).clip(img) else {
        return;
    };

    let half = width as f64 / 2.0;
    let vx = (to.0 - from.0) as f64;
    let vy = (to.1 - from.1) as f64;
    let len = vx.hypot(vy);

    for py in y0..=y1 {
        for px in x0..=x1 {
            let wx = px as f64 - from.0 as f64;
            let wy = py as f64 - from.1 as f64;

            let covered = if len == 0.0 {
                (-half..half).contains(&wx) && (-half..half).contains(&wy)
            } else {
                let along = (wx * vx + wy * vy) / len;
                let offset = (vx * wy - vy * wx) / len;
                (0.0..=len).contains(&along) && (-half..half).contains(&offset)
            };

            if covered {
                img.put_pixel(px, py, color);
            }
        }
    }
}
