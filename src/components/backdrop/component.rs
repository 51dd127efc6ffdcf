//! Leptos component wrapping the backdrop canvas.
//!
//! The component creates a fixed, full-viewport canvas behind the page and
//! wires window resize and pointer listeners into the scene. An animation
//! loop runs via `requestAnimationFrame`, ticking the scene once per frame
//! and rescheduling itself only after the frame has been drawn.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::BackdropConfig;
use super::scene::Scene;

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type MouseCallback = Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>>;

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Renders the animated starfield and particle network behind the page.
///
/// The canvas always fills the viewport. Resizing the window regenerates
/// both populations; moving the pointer repels nearby particles and links
/// them to the pointer.
#[component]
pub fn BackdropCanvas(#[prop(into)] config: Signal<BackdropConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<Option<Scene>>> = Rc::new(RefCell::new(None));
	let animate: Callback = Rc::new(RefCell::new(None));
	let resize_cb: Callback = Rc::new(RefCell::new(None));
	let move_cb: MouseCallback = Rc::new(RefCell::new(None));
	let leave_cb: MouseCallback = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		// Listeners and the frame loop are installed once per mount.
		if scene.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			warn!("starlit: viewport size unavailable");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(mut ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("starlit: 2d canvas context unavailable");
			return;
		};

		*scene.borrow_mut() = Some(Scene::new(config.get_untracked(), w, h, &mut rand::thread_rng()));

		let (scene_resize, canvas_resize) = (scene.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some((nw, nh)) = web_sys::window().and_then(|win| viewport_size(&win)) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *scene_resize.borrow_mut() {
				s.resize(nw, nh, &mut rand::thread_rng());
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let scene_move = scene.clone();
		*move_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut s) = *scene_move.borrow_mut() {
				s.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *move_cb.borrow() {
			let _ = window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let scene_leave = scene.clone();
		*leave_cb.borrow_mut() = Some(Closure::new(move |_: MouseEvent| {
			if let Some(ref mut s) = *scene_leave.borrow_mut() {
				s.pointer_left();
			}
		}));
		if let (Some(root), Some(cb)) = (
			window.document().and_then(|d| d.document_element()),
			leave_cb.borrow().as_ref(),
		) {
			let _ = root.add_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
		}

		let (scene_anim, animate_inner) = (scene.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *scene_anim.borrow_mut() {
				s.tick(&mut ctx);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="backdrop-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none; display: block;"
		/>
	}
}
