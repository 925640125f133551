/// Compile-time constants for icon geometry, palette and output layout

pub mod output {
    /// Icon sizes rendered by a batch run, in order
    pub const ICON_SIZES: [u32; 4] = [16, 32, 64, 128];

    /// Largest size the renderer accepts; keeps geometry in `i32` and the buffer bounded
    pub const MAX_SIZE: u32 = 4096;

    /// Directory (relative to the working directory) the icons are written to
    pub const OUTPUT_DIR: &str = "icons";

    /// Prefix of every generated file; the full name is `icon-{size}.png`
    pub const FILE_PREFIX: &str = "icon-";
}

pub mod palette {
    use image::Rgba;

    pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
    pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    /// Badge background
    pub const BADGE_BLUE: Rgba<u8> = Rgba([102, 126, 234, 255]); // #667EEA

    pub const CAPSULE_UPPER_FILL: Rgba<u8> = Rgba([255, 255, 255, 50]);
    pub const CAPSULE_UPPER_OUTLINE: Rgba<u8> = Rgba([255, 255, 255, 100]);
    pub const CAPSULE_LOWER_FILL: Rgba<u8> = Rgba([255, 255, 255, 30]);
    pub const CAPSULE_LOWER_OUTLINE: Rgba<u8> = Rgba([255, 255, 255, 80]);

    /// Clock rim
    pub const ACCENT_PINK: Rgba<u8> = Rgba([240, 147, 251, 255]); // #F093FB

    pub const FACE_FILL: Rgba<u8> = Rgba([255, 255, 255, 230]);
    pub const FACE_OUTLINE: Rgba<u8> = Rgba([221, 221, 221, 255]); // #DDDDDD

    /// Hands and pivot
    pub const DARK_GRAY: Rgba<u8> = Rgba([51, 51, 51, 255]); // #333333

    /// Hour ticks
    pub const MID_GRAY: Rgba<u8> = Rgba([102, 102, 102, 255]); // #666666

    /// Timeline dot opacity: top-left, top-right, bottom-left, bottom-right
    pub const TIMELINE_ALPHAS: [u8; 4] = [200, 150, 100, 180];
}

pub mod ratios {
    //! Fractions of the icon size, truncated toward zero after multiplication

    pub const BADGE_RADIUS: f64 = 0.45;
    pub const CAPSULE_RADIUS_X: f64 = 0.25;
    pub const CAPSULE_RADIUS_Y: f64 = 0.15;
    pub const CAPSULE_OFFSET: f64 = 0.25;
    pub const CLOCK_RADIUS: f64 = 0.2;
    pub const FACE_RADIUS: f64 = 0.15;
    pub const HOUR_HAND: f64 = 0.08;
    pub const MINUTE_HAND: f64 = 0.11;
    pub const TIMELINE_NEAR: f64 = 0.23;
    pub const TIMELINE_FAR: f64 = 0.77;
}

pub mod divisors {
    //! Stroke widths and dot radii are `max(1, size / DIVISOR)`

    pub const BADGE_STROKE: u32 = 32;
    pub const CAPSULE_STROKE: u32 = 64;
    pub const CLOCK_STROKE: u32 = 42;
    pub const FACE_STROKE: u32 = 128;
    pub const HOUR_HAND_STROKE: u32 = 42;
    pub const MINUTE_HAND_STROKE: u32 = 64;
    pub const PIVOT_RADIUS: u32 = 42;
    pub const TICK_RADIUS: u32 = 85;
    pub const TIMELINE_RADIUS: u32 = 42;
}
