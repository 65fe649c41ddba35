//! Browser front end for canvas Pong
//!
//! Wires the `game_core` simulation to a 2D canvas, the mouse, the difficulty
//! `<select>` and `requestAnimationFrame`. Only built for wasm32.

#![cfg(target_arch = "wasm32")]

mod input;
mod logger;
mod surface;

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use game_core::{Config, Difficulty, Game, GameError};
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

/// Main client state
struct Client {
    game: Game,
    surface: CanvasSurface,
    document: Document,
    // One animation-frame chain at a time
    loop_armed: bool,
    // Warn once per bad selector value
    bad_difficulty: Option<String>,
}

impl Client {
    fn new(canvas: &HtmlCanvasElement, document: Document) -> Result<Self, JsValue> {
        let config = Config::for_field(canvas.width() as f32, canvas.height() as f32)
            .map_err(to_js)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let seed = js_sys::Date::now() as u64;
        log::info!(
            "field {}x{}, seed {}",
            config.field_width,
            config.field_height,
            seed
        );

        Ok(Self {
            game: Game::new(config, seed),
            surface: CanvasSurface::new(ctx),
            document,
            loop_armed: false,
            bad_difficulty: None,
        })
    }

    fn difficulty(&mut self) -> Difficulty {
        match input::read_difficulty(&self.document) {
            Ok(difficulty) => {
                self.bad_difficulty = None;
                difficulty
            }
            Err(GameError::UnknownDifficulty(value)) => {
                if self.bad_difficulty.as_deref() != Some(value.as_str()) {
                    log::warn!(
                        "unknown difficulty `{}`, playing {}",
                        value,
                        Difficulty::default()
                    );
                    self.bad_difficulty = Some(value);
                }
                Difficulty::default()
            }
            Err(e) => {
                log::warn!("{}", e);
                Difficulty::default()
            }
        }
    }

    fn frame(&mut self) -> ControlFlow<()> {
        let difficulty = self.difficulty();
        let flow = self.game.tick(difficulty, &mut self.surface);
        if flow.is_break() {
            self.loop_armed = false;
        }
        flow
    }
}

thread_local! {
    // Global client storage for WASM bindings
    static CLIENT: RefCell<Option<Rc<RefCell<Client>>>> = const { RefCell::new(None) };
}

fn to_js(e: GameError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn client() -> Result<Rc<RefCell<Client>>, JsValue> {
    CLIENT
        .with(|c| c.borrow().clone())
        .ok_or_else(|| JsValue::from_str("Client not initialized"))
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Re-arm one animation frame at a time until the game says stop
fn run_loop(client: Rc<RefCell<Client>>) -> Result<(), JsValue> {
    let next: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = next.clone();

    *first.borrow_mut() = Some(Closure::new(move || {
        let flow = client.borrow_mut().frame();
        if flow.is_break() {
            // Drop the closure to end the chain
            let _ = next.borrow_mut().take();
            return;
        }

        if let Err(e) = arm(&next) {
            log::error!("requestAnimationFrame failed: {:?}", e);
            client.borrow_mut().loop_armed = false;
            // Nothing will call it again
            let _ = next.borrow_mut().take();
        }
    }));

    arm(&first)
}

/// Schedule the stored frame callback, if any
fn arm(slot: &RefCell<Option<Closure<dyn FnMut()>>>) -> Result<(), JsValue> {
    let callback = slot.borrow();
    match callback.as_ref() {
        Some(callback) => request_animation_frame(callback).map(|_| ()),
        None => Ok(()),
    }
}

/// Bind the game to a canvas. Draws the idle field and starts listening to the mouse.
#[wasm_bindgen]
pub fn init_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let client = Rc::new(RefCell::new(Client::new(&canvas, document)?));
    {
        let mut c = client.borrow_mut();
        let Client { game, surface, .. } = &mut *c;
        game.render(surface);
    }

    let on_move = {
        let client = client.clone();
        let canvas = canvas.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let top = input::surface_top(&canvas);
            client
                .borrow_mut()
                .game
                .pointer_moved(input::pointer_y(&event), top);
        })
    };
    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    // Lives as long as the page
    on_move.forget();

    CLIENT.with(|c| *c.borrow_mut() = Some(client));
    Ok(())
}

/// Start (or restart) a match. Wired to the page's start control.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    let client = client()?;

    let arm = {
        let mut c = client.borrow_mut();
        c.game.start();
        let arm = !c.loop_armed;
        c.loop_armed = true;
        arm
    };

    if arm {
        if let Err(e) = run_loop(client.clone()) {
            client.borrow_mut().loop_armed = false;
            return Err(e);
        }
    }
    Ok(())
}

/// Current scores as `[player, ai]`
#[wasm_bindgen]
pub fn scores() -> Result<Vec<u32>, JsValue> {
    let client = client()?;
    let score = client.borrow().game.state.score;
    Ok(vec![score.player, score.ai])
}
