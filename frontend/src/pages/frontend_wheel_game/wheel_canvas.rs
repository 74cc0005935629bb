use std::f64::consts::PI;

use shared::segment_color;
use shared::wheel_label::layout_label;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 340;
const LABEL_LINE_HEIGHT: f64 = 14.0;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub prizes: Vec<String>,
    pub rotation: f64,
    pub is_spinning: bool,
}

fn draw_wedges(context: &CanvasRenderingContext2d, prizes: &[String], radius: f64) {
    let count = prizes.len().max(1);
    let segment = 2.0 * PI / count as f64;

    for (i, label) in prizes.iter().enumerate() {
        // Wedge 0 starts at the pointer and wedges run clockwise
        let start = -0.5 * PI + i as f64 * segment;
        let end = start + segment;

        context.begin_path();
        context.set_fill_style_str(segment_color(i));
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, end);
        context.close_path();
        context.fill();

        context.begin_path();
        context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
        context.set_line_width(2.0);
        context.move_to(0.0, 0.0);
        context.line_to(radius * start.cos(), radius * start.sin());
        context.stroke();

        draw_label(context, label, start + segment / 2.0, radius);
    }
}

fn draw_label(context: &CanvasRenderingContext2d, label: &str, angle: f64, radius: f64) {
    let (lines, is_long) = layout_label(label);
    let font = if is_long {
        "600 11px 'Segoe UI', Roboto, system-ui, sans-serif"
    } else {
        "700 13px 'Segoe UI', Roboto, system-ui, sans-serif"
    };

    context.save();
    let _ = context.rotate(angle);
    let _ = context.translate(radius * 0.62, 0.0);
    // Text runs across the wedge, reading upright at the pointer
    let _ = context.rotate(0.5 * PI);
    context.set_font(font);
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#5a2a12");

    let first_line = -(lines.len() as f64 - 1.0) * LABEL_LINE_HEIGHT / 2.0;
    for (row, line) in lines.iter().enumerate() {
        let _ = context.fill_text(line, 0.0, first_line + row as f64 * LABEL_LINE_HEIGHT);
    }
    context.restore();
}

fn draw_pointer(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64, radius: f64, is_spinning: bool) {
    context.begin_path();
    context.move_to(center_x, center_y - radius + 14.0);
    context.line_to(center_x - 14.0, center_y - radius - 12.0);
    context.line_to(center_x + 14.0, center_y - radius - 12.0);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with(
            (props.prizes.clone(), props.rotation, props.is_spinning),
            move |(prizes, rotation, is_spinning)| {
                let context = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| canvas.get_context("2d").ok().flatten())
                    .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok());

                if let Some(context) = context {
                    let size = f64::from(CANVAS_SIZE);
                    let center_x = size / 2.0;
                    let center_y = size / 2.0;
                    let radius = size / 2.0 - 22.0;

                    context.clear_rect(0.0, 0.0, size, size);

                    // Rim
                    context.begin_path();
                    context.set_fill_style_str("#fff4e0");
                    let _ = context.arc(center_x, center_y, radius + 8.0, 0.0, 2.0 * PI);
                    context.fill();

                    context.save();
                    let _ = context.translate(center_x, center_y);
                    let _ = context.rotate(*rotation * PI / 180.0);
                    draw_wedges(&context, prizes, radius);
                    context.restore();

                    // Hub
                    context.begin_path();
                    context.set_fill_style_str("#ffffff");
                    let _ = context.arc(center_x, center_y, radius * 0.12, 0.0, 2.0 * PI);
                    context.fill();

                    draw_pointer(&context, center_x, center_y, radius, *is_spinning);
                } else {
                    log::warn!("wheel canvas has no 2d context");
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative flex justify-center">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[340px] h-auto rounded-full"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(247, 107, 82, 0.45));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
