// Rendering properties of the badge at the shipped sizes and at the edges
use capsule_icons::constants::output::{ICON_SIZES, MAX_SIZE};
use capsule_icons::constants::palette;
use capsule_icons::{render_icon, IconGeometry, RenderError};
use image::Rgba;

#[test]
fn test_dimensions_match_requested_size() {
    for size in ICON_SIZES {
        let img = render_icon(size).unwrap();
        assert_eq!(img.dimensions(), (size, size), "size {}", size);
    }
}

#[test]
fn test_stroke_widths_never_below_one() {
    for size in 1..=1024 {
        let geometry = IconGeometry::new(size).unwrap();
        for width in geometry.stroke_widths().as_array() {
            assert!(width >= 1, "size {} produced width {}", size, width);
        }
        assert!(geometry.pivot_radius >= 1);
        assert!(geometry.tick_radius >= 1);
        assert!(geometry.timeline_radius >= 1);
    }
}

// Below 7 px the one-pixel floors on dot radii reach past the edge; drawing clips them
#[test]
fn test_shapes_stay_inside_canvas() {
    for size in 7..=1024 {
        let geometry = IconGeometry::new(size).unwrap();
        for (i, shape) in geometry.shapes().iter().enumerate() {
            assert!(
                shape.bounds().within(size),
                "shape {} at size {} out of bounds: {:?}",
                i,
                size,
                shape.bounds()
            );
        }
    }
}

#[test]
fn test_degenerate_sizes_render_clipped() {
    for size in 1..=6 {
        let img = render_icon(size).unwrap();
        assert_eq!(img.dimensions(), (size, size));
    }
}

#[test]
fn test_largest_size_renders() {
    let img = render_icon(MAX_SIZE).unwrap();
    assert_eq!(img.dimensions(), (MAX_SIZE, MAX_SIZE));
}

#[test]
fn test_oversized_is_rejected() {
    assert_eq!(
        render_icon(MAX_SIZE + 1).unwrap_err(),
        RenderError::InvalidSize(MAX_SIZE + 1)
    );
    assert_eq!(
        render_icon(u32::MAX).unwrap_err(),
        RenderError::InvalidSize(u32::MAX)
    );
}

#[test]
fn test_zero_size_is_rejected() {
    assert_eq!(render_icon(0).unwrap_err(), RenderError::InvalidSize(0));
}

#[test]
fn test_rendering_is_deterministic() {
    for size in ICON_SIZES {
        assert_eq!(render_icon(size).unwrap(), render_icon(size).unwrap());
    }
}

#[test]
fn test_layers_at_128() {
    let img = render_icon(128).unwrap();
    let px = |x, y| *img.get_pixel(x, y);

    // Background outside the badge
    assert_eq!(px(0, 0), palette::TRANSPARENT);
    assert_eq!(px(127, 127), palette::TRANSPARENT);

    // Badge fill and its white rim
    assert_eq!(px(20, 64), palette::BADGE_BLUE);
    assert_eq!(px(64, 7), palette::WHITE);

    // Capsule panes replace the badge pixels, they are not blended over them
    assert_eq!(px(64, 32), palette::CAPSULE_UPPER_FILL);
    assert_eq!(px(64, 96), palette::CAPSULE_LOWER_FILL);

    // Clock rim, face, hands, pivot, ticks
    assert_eq!(px(64, 43), palette::ACCENT_PINK);
    assert_eq!(px(72, 72), palette::FACE_FILL);
    assert_eq!(px(64, 56), palette::DARK_GRAY);
    assert_eq!(px(76, 64), palette::DARK_GRAY);
    assert_eq!(px(64, 64), palette::DARK_GRAY);
    assert_eq!(px(81, 64), palette::MID_GRAY);

    // Timeline dots in the corners
    assert_eq!(px(29, 29), Rgba([255, 255, 255, 200]));
    assert_eq!(px(98, 29), Rgba([255, 255, 255, 150]));
    assert_eq!(px(29, 98), Rgba([255, 255, 255, 100]));
    assert_eq!(px(98, 98), Rgba([255, 255, 255, 180]));
}
