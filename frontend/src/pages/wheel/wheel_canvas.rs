use log::warn;
use shared::theme::Theme;
use shared::wheel_render::{draw_wheel, WheelSurface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::CANVAS_SIZE;
use crate::styles;

/// `WheelSurface` backed by a 2D canvas context.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let context = match canvas.get_context("2d") {
            Ok(Some(context)) => context,
            _ => {
                warn!("2D canvas context unavailable");
                return None;
            }
        };
        let context = context.dyn_into::<CanvasRenderingContext2d>().ok()?;

        Some(Self {
            context,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl WheelSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_sector(
        &mut self,
        center: (f64, f64),
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: &str,
        stroke: &str,
    ) {
        let context = &self.context;
        let (cx, cy) = center;

        context.begin_path();
        context.move_to(cx, cy);
        let _ = context.arc(cx, cy, radius, start_angle, end_angle);
        context.close_path();
        context.set_fill_style_str(fill);
        context.fill();
        context.set_stroke_style_str(stroke);
        context.set_line_width(1.0);
        context.stroke();
    }

    fn fill_text_radial(
        &mut self,
        center: (f64, f64),
        angle: f64,
        distance: f64,
        text: &str,
        color: &str,
        font: &str,
    ) {
        let context = &self.context;

        context.save();
        let _ = context.translate(center.0, center.1);
        let _ = context.rotate(angle);
        context.set_text_align("right");
        context.set_fill_style_str(color);
        context.set_font(font);
        let _ = context.fill_text(text, distance, 0.0);
        context.restore();
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)], fill: &str) {
        let Some((&(x, y), rest)) = points.split_first() else {
            return;
        };
        let context = &self.context;

        context.begin_path();
        context.move_to(x, y);
        for &(x, y) in rest {
            context.line_to(x, y);
        }
        context.close_path();
        context.set_fill_style_str(fill);
        context.fill();
    }

    fn fill_rotated_rect(&mut self, center: (f64, f64), width: f64, height: f64, angle: f64, fill: &str) {
        let context = &self.context;

        context.save();
        let _ = context.translate(center.0, center.1);
        let _ = context.rotate(angle);
        context.set_fill_style_str(fill);
        context.fill_rect(-width / 2.0, -height / 2.0, width, height);
        context.restore();
    }
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub labels: Vec<String>,
    pub rotation: f64,
    pub theme: Theme,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with(
            (props.labels.clone(), props.rotation, props.theme),
            move |(labels, rotation, theme)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(mut surface) = CanvasSurface::from_canvas(&canvas) {
                        draw_wheel(&mut surface, labels, *rotation, *theme);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class={styles::WHEEL_CANVAS}
        />
    }
}
