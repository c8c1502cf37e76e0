//! Match-3 gameplay: pure engine modules plus the browser glue that hosts
//! them.
//!
//! The engine (grid, matches, cascade, swap, anim, state) never touches the
//! DOM. Everything browser-facing is in this file: canvas setup, the click
//! listener, the score overlay, and the `requestAnimationFrame` loop that
//! calls one engine update and one render per frame. The frame loop owns the
//! [`GameState`] (through a thread-local slot, since the rAF callback has to
//! reach it) and hands it by mutable reference into each component call.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

pub mod anim;
pub mod cascade;
pub mod grid;
pub mod matches;
pub mod state;
pub mod swap;

use anim::{Animation, destruction_draw_inset, swap_draw_offset};
use grid::Color;
use state::{GameState, update};

/// Edge of one board cell in canvas pixels.
pub const CELL_SIZE: u32 = 64;
pub const ROWS: usize = 8;
pub const COLS: usize = 8;
pub const CANVAS_WIDTH: u32 = CELL_SIZE * COLS as u32;
pub const CANVAS_HEIGHT: u32 = CELL_SIZE * ROWS as u32;

/// Animation budget in ticks: 500 ms at the ~16.7 ms frame interval of a
/// 60 Hz display.
pub const ANIMATION_STEPS: u32 = 30;

/// Flat score credited per matched block.
pub const BLOCK_REWARD: u32 = 10;

const BACKGROUND: &str = "#5eead4";

/// Canvas handles plus the engine state they render.
struct App {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    state: GameState,
}

thread_local! {
    static GAME: RefCell<Option<App>> = RefCell::new(None);
}

/// Builds (or reuses) the canvas and score overlay, seeds the engine from the
/// performance clock, installs the click listener, and starts the frame loop.
pub fn start_match_mode() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("bc-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("bc-canvas");
        c.set_attribute("style", "position:fixed; left:50%; top:50%; transform:translate(-50%,-50%); box-shadow:0 0 32px 0 rgba(0,0,0,0.18); border-radius:12px; border:2px solid #222; z-index:20;").ok();
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    // Score overlay (top-left), created once and refreshed every frame.
    if doc.get_element_by_id("bc-score").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("bc-score");
            div.set_text_content(Some("Score: 0"));
            div.set_attribute("style", "position:fixed; top:10px; left:12px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:30; letter-spacing:0.5px;").ok();
            body.append_child(&div)?;
        }
    }

    // The performance clock is the entropy source; SmallRng spreads it out.
    let state = GameState::new(performance_now().to_bits());
    GAME.with(|g| g.replace(Some(App { canvas: canvas.clone(), ctx, state })));

    // Click listener. Only enqueues canvas-local coordinates; the tick drains
    // them, so all game-state mutation stays inside the update phase.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            // offset_x/offset_y are canvas-local, no DomRect needed.
            let x = evt.offset_x() as f64;
            let y = evt.offset_y() as f64;
            GAME.with(|cell| {
                if let Some(app) = cell.borrow_mut().as_mut() {
                    app.state.push_click(x, y);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    start_game_loop();
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_game_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        GAME.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                game_tick(app);
            }
        });
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// One frame: engine update, render, overlay refresh.
fn game_tick(app: &mut App) {
    update(&mut app.state);
    render(app);

    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id("bc-score") {
            el.set_text_content(Some(&format!("Score: {}", app.state.score)));
        }
    }
}

fn render(app: &App) {
    let ctx = &app.ctx;
    let state = &app.state;
    let cell = CELL_SIZE as f64;

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(
        0.0,
        0.0,
        app.canvas.width() as f64,
        app.canvas.height() as f64,
    );

    // Board pass: every occupied cell, slid toward its swap origin while a
    // slide is in flight.
    for y in 0..state.grid.rows() {
        for x in 0..state.grid.cols() {
            let Some(color) = state.grid.get(x, y) else {
                continue;
            };
            let mut px = x as f64 * cell;
            let mut py = y as f64 * cell;

            for animation in &state.animations {
                if let Animation::Swap {
                    from,
                    to,
                    steps_remaining,
                    total_steps,
                } = *animation
                {
                    if to == (x, y) {
                        let (ox, oy) = swap_draw_offset(from, to, steps_remaining, total_steps);
                        px += ox;
                        py += oy;
                    }
                }
            }

            draw_block(ctx, color, px, py, cell);
        }
    }

    // Destruction overlays: the removed block shrinking in place. Drawn after
    // the board so the shrink stays visible over whatever refilled the cell.
    for animation in &state.animations {
        if let Animation::Destruction {
            cell: (x, y),
            color,
            scale,
            ..
        } = *animation
        {
            if scale <= 0.0 {
                continue;
            }
            let inset = destruction_draw_inset(scale);
            let px = x as f64 * cell + inset;
            let py = y as f64 * cell + inset;
            draw_block(ctx, color, px, py, cell * scale);
        }
    }

    if let Some(selected) = &state.selected {
        ctx.set_stroke_style_str("white");
        ctx.set_line_width(2.0);
        ctx.stroke_rect(selected.x as f64 * cell, selected.y as f64 * cell, cell, cell);
    }
}

fn draw_block(ctx: &CanvasRenderingContext2d, color: Color, px: f64, py: f64, size: f64) {
    ctx.set_fill_style_str(color.css());
    ctx.fill_rect(px + 1.0, py + 1.0, size - 2.0, size - 2.0);
    ctx.set_stroke_style_str("rgba(0,0,0,0.25)");
    ctx.set_line_width(2.0);
    ctx.stroke_rect(px + 2.0, py + 2.0, size - 4.0, size - 4.0);
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
