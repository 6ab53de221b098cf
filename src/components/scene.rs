use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

// Star positions are derived from the index so the field is stable
// across frames without carrying any state.
fn star(i: usize, w: f64, h: f64) -> (f64, f64, f64) {
    let n = i as f64;
    let x = ((n * 12.9898).sin() * 43758.5453).fract().abs() * w;
    let y = ((n * 78.233).sin() * 12543.1212).fract().abs() * h;
    let r = ((n * 3.7).sin().abs() * 1.3) + 0.2;
    (x, y, r)
}

fn draw_frame(ctx: &CanvasRenderingContext2d, w: f64, h: f64, t: f64, scroll: f64) {
    // Background and fog-like vertical fade.
    ctx.set_fill_style_str("#050505");
    ctx.fill_rect(0.0, 0.0, w, h);

    // Starfield, drifting with the slow group rotation.
    let drift = t * 0.1;
    ctx.set_fill_style_str("#e5e7eb");
    for i in 0..160 {
        let (x, y, r) = star(i, w, h);
        let x = (x + drift * 18.0 * ((i % 5) as f64 + 1.0)) % w;
        let twinkle = 0.25 + 0.75 * ((t * 1.5 + i as f64).sin() * 0.5 + 0.5);
        ctx.set_global_alpha(twinkle * 0.8);
        ctx.begin_path();
        let _ = ctx.arc(x, y, r, 0.0, PI * 2.0);
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);

    let parallax = -scroll * 0.08;

    // Background ring behind everything.
    ctx.save();
    let _ = ctx.translate(w * 0.5, h * 0.78 + parallax * 0.5);
    ctx.set_stroke_style_str("rgba(30, 64, 175, 0.2)");
    ctx.set_line_width(3.0);
    ctx.begin_path();
    let _ = ctx.ellipse(0.0, 0.0, w * 0.45, h * 0.12, drift * 0.3, 0.0, PI * 2.0);
    ctx.stroke();
    ctx.restore();

    // Floating distorted orb, right of center.
    ctx.save();
    let float_y = (t * 2.0).sin() * 14.0;
    let _ = ctx.translate(w * 0.68, h * 0.45 + float_y + parallax);
    let radius = h * 0.13 * (1.0 + 0.06 * (t * 2.0 * 2.0).sin());
    if let Ok(gradient) =
        ctx.create_radial_gradient(-radius * 0.3, -radius * 0.3, radius * 0.1, 0.0, 0.0, radius)
    {
        let _ = gradient.add_color_stop(0.0, "#93c5fd");
        let _ = gradient.add_color_stop(0.6, "#3b82f6");
        let _ = gradient.add_color_stop(1.0, "rgba(30, 64, 175, 0.15)");
        ctx.set_fill_style_canvas_gradient(&gradient);
    }
    ctx.begin_path();
    let _ = ctx.arc(0.0, 0.0, radius, 0.0, PI * 2.0);
    ctx.fill();
    ctx.restore();

    // Wobbling wireframe polygon, upper left.
    ctx.save();
    let _ = ctx.translate(w * 0.18, h * 0.25 + (t * 3.0).cos() * 10.0 + parallax);
    let _ = ctx.rotate(drift * 2.0);
    let wobble = 1.0 + 0.1 * (t * 1.5).sin();
    let size = h * 0.05 * wobble;
    ctx.set_stroke_style_str("#60a5fa");
    ctx.set_line_width(1.5);
    ctx.begin_path();
    for k in 0..=6 {
        let angle = k as f64 / 6.0 * PI * 2.0;
        let (x, y) = (angle.cos() * size, angle.sin() * size);
        if k == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();
    ctx.restore();

    // Grid floor fading toward the horizon.
    ctx.set_stroke_style_str("rgba(30, 58, 138, 0.35)");
    ctx.set_line_width(1.0);
    let horizon = h * 0.82 + parallax * 0.3;
    for row in 0..10 {
        let p = row as f64 / 10.0;
        let y = horizon + p * p * (h - horizon);
        ctx.set_global_alpha(0.1 + p * 0.4);
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        ctx.stroke();
    }
    for col in 0..24 {
        let x = col as f64 / 23.0 * w;
        let spread = (x - w * 0.5) * 1.6;
        ctx.set_global_alpha(0.18);
        ctx.begin_path();
        ctx.move_to(x, horizon);
        ctx.line_to(w * 0.5 + spread, h);
        ctx.stroke();
    }
    ctx.set_global_alpha(1.0);
}

/// Fixed full-viewport canvas behind the page content: starfield, orb,
/// wireframe polygon, ring and grid floor animated per frame, with a
/// mild parallax tied to the scroll position.
#[function_component(Scene)]
pub fn scene() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let canvas: HtmlCanvasElement = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .expect("scene canvas not mounted");
                let ctx = canvas
                    .get_context("2d")
                    .unwrap()
                    .unwrap()
                    .dyn_into::<CanvasRenderingContext2d>()
                    .unwrap();

                let start = web_sys::js_sys::Date::now();
                let raf_handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
                let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));

                {
                    let window = window.clone();
                    let raf_handle = raf_handle.clone();
                    let frame_outer = frame.clone();
                    let frame_inner = frame.clone();
                    *frame_outer.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        let w = window.inner_width().unwrap().as_f64().unwrap();
                        let h = window.inner_height().unwrap().as_f64().unwrap();
                        if canvas.width() != w as u32 || canvas.height() != h as u32 {
                            canvas.set_width(w as u32);
                            canvas.set_height(h as u32);
                        }

                        let t = (web_sys::js_sys::Date::now() - start) / 1000.0;
                        let scroll = window.scroll_y().unwrap_or(0.0);
                        draw_frame(&ctx, w, h, t, scroll);

                        let id = window
                            .request_animation_frame(
                                frame_inner
                                    .borrow()
                                    .as_ref()
                                    .unwrap()
                                    .as_ref()
                                    .unchecked_ref(),
                            )
                            .unwrap();
                        *raf_handle.borrow_mut() = Some(id);
                    })
                        as Box<dyn FnMut()>));
                }

                let id = window
                    .request_animation_frame(
                        frame.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    )
                    .unwrap();
                *raf_handle.borrow_mut() = Some(id);

                let window = web_sys::window().unwrap();
                move || {
                    if let Some(id) = raf_handle.borrow_mut().take() {
                        let _ = window.cancel_animation_frame(id);
                    }
                    frame.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <>
            <style>
                {r#"
                    .scene-canvas {
                        position: fixed;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        z-index: 0;
                        pointer-events: none;
                    }
                "#}
            </style>
            <canvas ref={canvas_ref} class="scene-canvas" />
        </>
    }
}
