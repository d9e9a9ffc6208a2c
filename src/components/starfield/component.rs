//! Leptos component wrapping the animated sky canvas.
//!
//! The component creates an HTML canvas element and wires up pointer and
//! click handlers, the spawner interval timers, and the window resize
//! listener. An animation loop runs via `requestAnimationFrame`, advancing
//! the simulation one tick and re-rendering each frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement, MouseEvent, Window,
};

use super::render;
use super::spawn::{METEOR_SPAWN_INTERVAL_MS, TEXT_SPAWN_INTERVAL_MS};
use super::state::SceneState;
use super::theme::Theme;
use super::types::SceneConfig;

/// Bundles simulation state with the visual theme.
struct SceneContext {
	state: SceneState,
	theme: Theme,
}

type SharedClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Renders the animated starfield on a canvas element.
///
/// Pass the message catalog and particle populations via the reactive
/// `config` signal. The component sizes itself to its parent container by
/// default; set `fullscreen = true` to fill the viewport and resize
/// automatically with the window.
#[component]
pub fn StarfieldCanvas(
	#[prop(into)] config: Signal<SceneConfig>,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SceneContext>>> = Rc::new(RefCell::new(None));
	let animate: SharedClosure = Rc::new(RefCell::new(None));
	let resize_cb: SharedClosure = Rc::new(RefCell::new(None));
	let text_timer: SharedClosure = Rc::new(RefCell::new(None));
	let meteor_timer: SharedClosure = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init, text_timer_init, meteor_timer_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		text_timer.clone(),
		meteor_timer.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0),
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let seed = js_sys::Date::now() as u64;
		*context_init.borrow_mut() = Some(SceneContext {
			state: SceneState::new(&config.get(), w, h, seed),
			theme: Theme::default(),
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		// Spawner timers. The text spawner measures candidate messages on the
		// live canvas so placement accounts for the real rendered width.
		let (context_text, ctx_text) = (context_init.clone(), ctx.clone());
		*text_timer_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_text.borrow_mut() {
				let style = c.theme.text.clone();
				c.state.try_spawn_text(|text, size| {
					ctx_text.set_font(&style.font(size));
					ctx_text
						.measure_text(text)
						.map(|m| m.width())
						.unwrap_or(0.0)
				});
			}
		}));
		if let Some(ref cb) = *text_timer_init.borrow() {
			let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				TEXT_SPAWN_INTERVAL_MS,
			);
		}

		let context_meteor = context_init.clone();
		*meteor_timer_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_meteor.borrow_mut() {
				c.state.try_spawn_meteor();
			}
		}));
		if let Some(ref cb) = *meteor_timer_init.borrow() {
			let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				METEOR_SPAWN_INTERVAL_MS,
			);
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick();
				render::render(&c.state, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.set_pointer(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
		}
	};

	let context_click = context.clone();
	let music_started = Rc::new(Cell::new(false));
	let on_click = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_click.borrow_mut() {
			c.state.reshuffle_heart();
		}
		// Browsers only allow audio after a user gesture, so the first click
		// doubles as the music trigger.
		if !music_started.get() {
			music_started.set(true);
			start_music();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="starfield-canvas"
			on:mousemove=on_mousemove
			on:click=on_click
			style="display: block;"
		/>
	}
}

/// Best-effort start of the page's background music. Failure is logged and
/// swallowed, never propagated or retried.
fn start_music() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let Some(element) = document.get_element_by_id("bg-music") else {
		return;
	};
	let audio: HtmlAudioElement = match element.dyn_into() {
		Ok(audio) => audio,
		Err(_) => {
			warn!("amor-canvas: #bg-music is not an audio element");
			return;
		}
	};
	match audio.play() {
		Ok(promise) => {
			let on_rejected = Closure::<dyn FnMut(JsValue)>::new(|err: JsValue| {
				warn!("amor-canvas: music playback blocked: {err:?}");
			});
			let _ = promise.catch(&on_rejected);
			on_rejected.forget();
		}
		Err(err) => warn!("amor-canvas: music playback failed to start: {err:?}"),
	}
}
