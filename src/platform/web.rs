//! Browser host
//!
//! Expects this markup (ids only, styling is up to the page):
//! `#open-game-btn`, `#game-dialog`, `#close-game-btn`, `#score`, `#prompt`
//! (with `#prompt-heading`, `#prompt-body`, `#prompt-btn`), `#board` (with
//! `#items` and `#catcher`), `#toast`. An optional
//! `<script id="game-config" type="application/json">` overrides tuning.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, TouchEvent};

use crate::game::GameLoop;
use crate::notify::{Notifier, Toast, ToastLevel};
use crate::platform::weak_frame_handler;
use crate::sim::{Catcher, PlaySurface, PointerSample};
use crate::tuning::GameConfig;
use crate::ui::{self, GameDialog, Screen};

/// How long a toast stays up
const TOAST_MS: i32 = 2000;

/// Shows toasts in the `#toast` element
#[derive(Debug, Default)]
pub struct DomToaster {
    shown: u32,
}

impl Notifier for DomToaster {
    fn notify(&mut self, toast: Toast) {
        let Some(el) = document().and_then(|d| d.get_element_by_id("toast")) else {
            log::info!("{}", toast.message);
            return;
        };
        self.shown = self.shown.wrapping_add(1);
        let seq = self.shown.to_string();

        let class = match toast.level {
            ToastLevel::Success => "toast success",
            ToastLevel::Error => "toast error",
        };
        el.set_text_content(Some(&toast.message));
        let _ = el.set_attribute("class", class);
        let _ = el.set_attribute("data-seq", &seq);

        // Hide later unless a newer toast replaced this one
        let closure = Closure::once(move || {
            if let Some(el) = document().and_then(|d| d.get_element_by_id("toast")) {
                if el.get_attribute("data-seq").as_deref() == Some(seq.as_str()) {
                    let _ = el.set_attribute("class", "toast hidden");
                }
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TOAST_MS,
            );
        }
        closure.forget();
    }
}

/// Everything the page holds on to
struct WebGame {
    dialog: GameDialog<DomToaster>,
    /// Pending requestAnimationFrame handle
    frame_handle: Option<i32>,
    /// Reused for every frame request; holds only a weak reference back
    frame_callback: Option<Closure<dyn FnMut(f64)>>,
}

type Shared = Rc<RefCell<WebGame>>;

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn set_hidden(el: &Element, hidden: bool) {
    let _ = el.class_list().toggle_with_force("hidden", hidden);
}

/// Read the optional inline config block
fn load_config(document: &Document) -> GameConfig {
    let json = document
        .get_element_by_id("game-config")
        .and_then(|el| el.text_content());
    GameConfig::load_or_default(json.as_deref())
}

pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger init failed: {e}")));
    }

    log::info!("Plate Catch starting...");

    let Some(document) = document() else {
        log::error!("No document - nothing to attach to");
        return;
    };

    let seed = js_sys::Date::now() as u64;
    let config = load_config(&document);
    let game = Rc::new(RefCell::new(WebGame {
        dialog: GameDialog::new(GameLoop::new(config, seed, DomToaster::default())),
        frame_handle: None,
        frame_callback: None,
    }));
    let callback = Closure::<dyn FnMut(f64)>::new(weak_frame_handler(&game, on_frame));
    game.borrow_mut().frame_callback = Some(callback);
    log::info!("Game initialized with seed: {}", seed);

    {
        let mut g = game.borrow_mut();
        g.dialog.on_open_change(|open| {
            if let Some(body) = document().and_then(|d| d.body()) {
                let _ = body.class_list().toggle_with_force("game-open", open);
            }
        });
    }

    if let Some(el) = document.get_element_by_id("game-title") {
        el.set_text_content(Some(ui::TITLE));
    }
    if let Some(el) = document.get_element_by_id("game-hint") {
        el.set_text_content(Some(ui::HINT));
    }

    setup_dialog_buttons(&document, game.clone());
    setup_input_handlers(&document, game.clone());
    setup_keyboard(game.clone());

    render(&game.borrow());
    log::info!("Plate Catch ready");
}

fn on_click(el: &Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| handler());
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn open_dialog(game: &Shared) {
    game.borrow_mut().dialog.set_open(true);
    render(&game.borrow());
}

fn close_dialog(game: &Shared) {
    cancel_frame(game);
    game.borrow_mut().dialog.set_open(false);
    render(&game.borrow());
}

fn press_start(game: &Shared) {
    let started = game.borrow_mut().dialog.press_start(now_ms());
    if started {
        ensure_frame(game);
    }
    render(&game.borrow());
}

fn setup_dialog_buttons(document: &Document, game: Shared) {
    if let Some(btn) = document.get_element_by_id("open-game-btn") {
        let game = game.clone();
        on_click(&btn, move || open_dialog(&game));
    }

    if let Some(btn) = document.get_element_by_id("close-game-btn") {
        let game = game.clone();
        on_click(&btn, move || close_dialog(&game));
    }

    if let Some(btn) = document.get_element_by_id("prompt-btn") {
        on_click(&btn, move || press_start(&game));
    }
}

fn surface_of(board: &Element) -> PlaySurface {
    let rect = board.get_bounding_client_rect();
    PlaySurface::new(rect.left() as f32, rect.width() as f32)
}

fn setup_input_handlers(document: &Document, game: Shared) {
    let Some(board) = document.get_element_by_id("board") else {
        log::warn!("No #board element - input disabled");
        return;
    };

    // Mouse move
    {
        let game = game.clone();
        let board_clone = board.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let surface = surface_of(&board_clone);
            let sample = PointerSample::mouse(event.client_x() as f32);
            game.borrow_mut().dialog.game_mut().pointer(sample, &surface);
        });
        let _ =
            board.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Touch move
    {
        let board_clone = board.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            if let Some(touch) = event.touches().get(0) {
                let surface = surface_of(&board_clone);
                let sample = PointerSample::touch(touch.client_x() as f32);
                game.borrow_mut().dialog.game_mut().pointer(sample, &surface);
            }
        });
        let _ =
            board.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn setup_keyboard(game: Shared) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        if !game.borrow().dialog.is_open() {
            return;
        }
        match event.key().as_str() {
            "Escape" => close_dialog(&game),
            " " | "Enter" => press_start(&game),
            "i" | "I" => {
                let mut g = game.borrow_mut();
                let enabled = !g.dialog.game().autopilot();
                g.dialog.game_mut().set_autopilot(enabled);
            }
            _ => {}
        }
    });
    let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Request a frame unless one is already pending
fn ensure_frame(game: &Shared) {
    if game.borrow().frame_handle.is_some() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let requested = match game.borrow().frame_callback.as_ref() {
        Some(callback) => window.request_animation_frame(callback.as_ref().unchecked_ref()),
        None => {
            log::error!("Frame callback missing");
            return;
        }
    };
    match requested {
        Ok(handle) => game.borrow_mut().frame_handle = Some(handle),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
}

/// Cancel the pending frame, if any
fn cancel_frame(game: &Shared) {
    let handle = game.borrow_mut().frame_handle.take();
    if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
        let _ = window.cancel_animation_frame(handle);
    }
}

fn on_frame(game: &Shared, time: f64) {
    let report = {
        let mut g = game.borrow_mut();
        g.frame_handle = None;
        g.dialog.game_mut().frame(time)
    };
    render(&game.borrow());
    if report.keep_running {
        ensure_frame(game);
    }
}

fn render(game: &WebGame) {
    let Some(document) = document() else {
        return;
    };

    if let Some(el) = document.get_element_by_id("game-dialog") {
        set_hidden(&el, !game.dialog.is_open());
    }
    let Some(screen) = game.dialog.screen() else {
        return;
    };

    let session = game.dialog.game().session();
    if let Some(el) = document.get_element_by_id("score") {
        el.set_text_content(Some(&session.score.to_string()));
    }

    let on_board = screen == Screen::Board;
    if let Some(el) = document.get_element_by_id("prompt") {
        set_hidden(&el, on_board);
    }
    if let Some(el) = document.get_element_by_id("board") {
        set_hidden(&el, !on_board);
    }

    if !on_board {
        if let Some(el) = document.get_element_by_id("prompt-heading") {
            el.set_text_content(screen.heading());
        }
        if let Some(el) = document.get_element_by_id("prompt-body") {
            el.set_text_content(screen.body().as_deref());
        }
        if let Some(el) = document.get_element_by_id("prompt-btn") {
            el.set_text_content(screen.button_label());
        }
        return;
    }

    if let Some(layer) = document.get_element_by_id("items") {
        let mut html = String::with_capacity(session.items.len() * 96);
        for item in &session.items {
            let _ = write!(
                html,
                r#"<div class="item" data-id="{}" style="left:{:.2}%;top:{:.2}%">{}</div>"#,
                item.id,
                item.pos.x,
                item.pos.y,
                item.kind.glyph()
            );
        }
        layer.set_inner_html(&html);
    }

    if let Some(el) = document.get_element_by_id("catcher") {
        let pos = session.catcher.pos;
        let _ = el.set_attribute("style", &format!("left:{:.2}%;top:{:.2}%", pos.x, pos.y));
        el.set_text_content(Some(Catcher::GLYPH));
    }
}
