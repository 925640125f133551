use crate::constants::output::MAX_SIZE;
use crate::constants::{divisors, palette, ratios};
use crate::draw::{BBox, Outline, Shape};
use crate::error::RenderError;
use image::{Rgba, RgbaImage};

/// `trunc(size * ratio)`
fn scaled(size: u32, ratio: f64) -> i32 {
    (size as f64 * ratio) as i32
}

/// `max(1, size / divisor)`
fn floored(size: u32, divisor: u32) -> i32 {
    (size / divisor).max(1) as i32
}

/// Stroke widths used by the badge, all at least one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeWidths {
    pub badge: u32,
    pub capsule: u32,
    pub clock: u32,
    pub face: u32,
    pub hour_hand: u32,
    pub minute_hand: u32,
}

impl StrokeWidths {
    pub fn as_array(&self) -> [u32; 6] {
        [
            self.badge,
            self.capsule,
            self.clock,
            self.face,
            self.hour_hand,
            self.minute_hand,
        ]
    }
}

/// Scalars derived from the icon size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub center: i32,
    pub badge_radius: i32,
    pub capsule_radius_x: i32,
    pub capsule_radius_y: i32,
    pub capsule_offset: i32,
    pub clock_radius: i32,
    pub face_radius: i32,
    pub hour_length: i32,
    pub minute_length: i32,
    pub pivot_radius: i32,
    pub tick_radius: i32,
    pub timeline_radius: i32,
    pub timeline_near: i32,
    pub timeline_far: i32,
    pub strokes: StrokeWidths,
}

impl IconGeometry {
    pub fn new(size: u32) -> Result<Self, RenderError> {
        if size == 0 || size > MAX_SIZE {
            return Err(RenderError::InvalidSize(size));
        }

        let strokes = StrokeWidths {
            badge: floored(size, divisors::BADGE_STROKE) as u32,
            capsule: floored(size, divisors::CAPSULE_STROKE) as u32,
            clock: floored(size, divisors::CLOCK_STROKE) as u32,
            face: floored(size, divisors::FACE_STROKE) as u32,
            hour_hand: floored(size, divisors::HOUR_HAND_STROKE) as u32,
            minute_hand: floored(size, divisors::MINUTE_HAND_STROKE) as u32,
        };

        Ok(IconGeometry {
            size,
            center: (size / 2) as i32,
            badge_radius: scaled(size, ratios::BADGE_RADIUS),
            capsule_radius_x: scaled(size, ratios::CAPSULE_RADIUS_X),
            capsule_radius_y: scaled(size, ratios::CAPSULE_RADIUS_Y),
            capsule_offset: scaled(size, ratios::CAPSULE_OFFSET),
            clock_radius: scaled(size, ratios::CLOCK_RADIUS),
            face_radius: scaled(size, ratios::FACE_RADIUS),
            hour_length: scaled(size, ratios::HOUR_HAND),
            minute_length: scaled(size, ratios::MINUTE_HAND),
            pivot_radius: floored(size, divisors::PIVOT_RADIUS),
            tick_radius: floored(size, divisors::TICK_RADIUS),
            timeline_radius: floored(size, divisors::TIMELINE_RADIUS),
            timeline_near: scaled(size, ratios::TIMELINE_NEAR),
            timeline_far: scaled(size, ratios::TIMELINE_FAR),
            strokes,
        })
    }

    pub fn stroke_widths(&self) -> StrokeWidths {
        self.strokes
    }

    fn circle(&self, cx: i32, cy: i32, r: i32, fill: Rgba<u8>, outline: Option<Outline>) -> Shape {
        Shape::Ellipse {
            bbox: BBox::around(cx, cy, r, r),
            fill,
            outline,
        }
    }

    /// Centers of the 12, 3, 6 and 9 o'clock ticks
    pub fn tick_positions(&self) -> [(i32, i32); 4] {
        let c = self.center;
        let reach = self.face_radius - self.tick_radius * 2;
        [(c, c - reach), (c + reach, c), (c, c + reach), (c - reach, c)]
    }

    /// Centers of the corner dots: top-left, top-right, bottom-left, bottom-right
    pub fn timeline_positions(&self) -> [(i32, i32); 4] {
        let (near, far) = (self.timeline_near, self.timeline_far);
        [(near, near), (far, near), (near, far), (far, far)]
    }

    /// Drawing instructions, back to front
    pub fn shapes(&self) -> Vec<Shape> {
        let c = self.center;
        let s = self.strokes;
        let mut shapes = Vec::with_capacity(16);

        // Badge
        shapes.push(self.circle(
            c,
            c,
            self.badge_radius,
            palette::BADGE_BLUE,
            Some(Outline {
                color: palette::WHITE,
                width: s.badge,
            }),
        ));

        // Capsule halves
        let capsule = [
            (-self.capsule_offset, palette::CAPSULE_UPPER_FILL, palette::CAPSULE_UPPER_OUTLINE),
            (self.capsule_offset, palette::CAPSULE_LOWER_FILL, palette::CAPSULE_LOWER_OUTLINE),
        ];
        for (dy, fill, outline) in capsule {
            shapes.push(Shape::Ellipse {
                bbox: BBox::around(c, c + dy, self.capsule_radius_x, self.capsule_radius_y),
                fill,
                outline: Some(Outline {
                    color: outline,
                    width: s.capsule,
                }),
            });
        }

        // Clock rim and face
        shapes.push(self.circle(
            c,
            c,
            self.clock_radius,
            palette::ACCENT_PINK,
            Some(Outline {
                color: palette::WHITE,
                width: s.clock,
            }),
        ));
        shapes.push(self.circle(
            c,
            c,
            self.face_radius,
            palette::FACE_FILL,
            Some(Outline {
                color: palette::FACE_OUTLINE,
                width: s.face,
            }),
        ));

        // Hands
        shapes.push(Shape::Line {
            from: (c, c),
            to: (c, c - self.hour_length),
            color: palette::DARK_GRAY,
            width: s.hour_hand,
        });
        shapes.push(Shape::Line {
            from: (c, c),
            to: (c + self.minute_length, c),
            color: palette::DARK_GRAY,
            width: s.minute_hand,
        });

        shapes.push(self.circle(c, c, self.pivot_radius, palette::DARK_GRAY, None));

        for (x, y) in self.tick_positions() {
            shapes.push(self.circle(x, y, self.tick_radius, palette::MID_GRAY, None));
        }

        for ((x, y), alpha) in self.timeline_positions().into_iter().zip(palette::TIMELINE_ALPHAS) {
            let fill = Rgba([255, 255, 255, alpha]);
            shapes.push(self.circle(x, y, self.timeline_radius, fill, None));
        }

        shapes
    }
}

/// Render the clock-in-capsule badge at `size`x`size`
pub fn render_icon(size: u32) -> Result<RgbaImage, RenderError> {
    let geometry = IconGeometry::new(size)?;
    let _span = tracing::debug_span!("render", size).entered();
    tracing::debug!(?geometry, "icon geometry");

    let mut img = RgbaImage::from_pixel(size, size, palette::TRANSPARENT);
    for shape in geometry.shapes() {
        shape.paint(&mut img);
    }

    Ok(img)
}
