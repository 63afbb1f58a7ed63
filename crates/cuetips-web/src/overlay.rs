//! Rendering of the simulation result: the service's SVG plus the
//! cue-stick line computed from the returned geometry.

use cuetips_core::{cue_segment, SimResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::CanvasRenderingContext2d;

use crate::page::Page;

const CUE_WIDTH: f64 = 4.0;
const CUE_COLOR: &str = "#8b5a2b";

/// Draw the latest result, or clear everything when there is none.
pub fn render(page: &Page, result: Option<&SimResult>) -> Result<(), JsValue> {
    let ctx = page
        .overlay
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected 2d context type"))?;
    ctx.clear_rect(
        0.0,
        0.0,
        page.overlay.width() as f64,
        page.overlay.height() as f64,
    );

    let Some(result) = result else {
        page.svg_host.set_inner_html("");
        return Ok(());
    };

    page.svg_host.set_inner_html(&result.svg);

    let segment = cue_segment(&result.cue);
    ctx.begin_path();
    ctx.move_to(segment.start.x as f64, segment.start.y as f64);
    ctx.line_to(segment.end.x as f64, segment.end.y as f64);
    ctx.set_line_width(CUE_WIDTH);
    ctx.set_stroke_style_str(CUE_COLOR);
    ctx.stroke();

    Ok(())
}
