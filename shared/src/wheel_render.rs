use crate::constants::SLICE_PALETTE;
use crate::shared_wheel_game::slice_width;
use crate::theme::Theme;

const RIM_INSET: f64 = 5.0;
const LABEL_INSET: f64 = 20.0;
const LABEL_FONT: &str = "14px sans-serif";
const SLICE_STROKE: &str = "#fff";
const POINTER_COLOR: &str = "#000";
const POINTER_HALF_WIDTH: f64 = 8.0;

/// The 2D drawing operations the wheel and confetti need.
///
/// Angles are radians in canvas convention: 0 points right and angles grow
/// clockwise on screen because the y axis points down.
pub trait WheelSurface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);

    fn clear(&mut self);

    /// Pie slice from `center` between two angles, filled then outlined with a 1px stroke.
    fn fill_sector(
        &mut self,
        center: (f64, f64),
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: &str,
        stroke: &str,
    );

    /// Text rotated by `angle` around `center`, right-aligned so it ends `distance` px out.
    fn fill_text_radial(
        &mut self,
        center: (f64, f64),
        angle: f64,
        distance: f64,
        text: &str,
        color: &str,
        font: &str,
    );

    fn fill_polygon(&mut self, points: &[(f64, f64)], fill: &str);

    /// Axis-aligned rectangle centred on `center`, then rotated by `angle`.
    fn fill_rotated_rect(&mut self, center: (f64, f64), width: f64, height: f64, angle: f64, fill: &str);
}

pub fn slice_color(index: usize) -> &'static str {
    SLICE_PALETTE[index % SLICE_PALETTE.len()]
}

/// Redraws the whole wheel at `rotation`.
pub fn draw_wheel<S: WheelSurface + ?Sized>(surface: &mut S, labels: &[String], rotation: f64, theme: Theme) {
    surface.clear();
    if labels.is_empty() {
        return;
    }

    let (width, height) = surface.size();
    let radius = width.min(height) / 2.0;
    let center = (width / 2.0, height / 2.0);
    let slice = slice_width(labels.len());

    for (i, label) in labels.iter().enumerate() {
        let start = rotation + i as f64 * slice;
        let end = start + slice;
        surface.fill_sector(center, radius - RIM_INSET, start, end, slice_color(i), SLICE_STROKE);
        surface.fill_text_radial(
            center,
            start + slice / 2.0,
            radius - LABEL_INSET,
            label,
            theme.label_color(),
            LABEL_FONT,
        );
    }

    draw_pointer(surface, center, radius);
}

// Fixed triangle at the top; it never rotates with the wheel
fn draw_pointer<S: WheelSurface + ?Sized>(surface: &mut S, center: (f64, f64), radius: f64) {
    let (cx, cy) = center;
    let points = [
        (cx, cy - radius + RIM_INSET),
        (cx - POINTER_HALF_WIDTH, cy - radius + LABEL_INSET),
        (cx + POINTER_HALF_WIDTH, cy - radius + LABEL_INSET),
    ];
    surface.fill_polygon(&points, POINTER_COLOR);
}
