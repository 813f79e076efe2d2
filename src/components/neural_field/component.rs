//! Leptos component wrapping the neural field canvas.
//!
//! The component renders a container holding the canvas and any overlaid
//! children. Pointer handlers sit on the container, so content stacked above
//! the canvas still steers the neurons. An animation loop runs via
//! `requestAnimationFrame`, letting the [`FrameDriver`] update and render the
//! field each frame. Unmounting stops the loop; the next frame then detaches
//! the resize listener and releases both callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::error::CanvasError;

use super::driver::{FrameDriver, StopHandle};
use super::state::ParticleField;
use super::theme::Theme;
use super::types::FieldConfig;

/// Bundles the simulation with its visual configuration and frame driver.
struct FieldContext {
	field: ParticleField,
	theme: Theme,
	driver: FrameDriver,
}

/// How the canvas picks its pixel size.
#[derive(Clone, Copy, Debug)]
struct Sizing {
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
}

/// Shared handles between the mount effect, the event closures and teardown.
///
/// The animation closure holds a clone of these, including the cell that owns
/// the closure itself; [`teardown`] breaks that cycle.
#[derive(Clone)]
struct Handles {
	context: Rc<RefCell<Option<FieldContext>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
	resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	stop: StopHandle,
}

/// Renders the animated neuron field behind optional overlay content.
///
/// Pass tuning via the reactive `config` signal; a change re-seeds the field
/// in place. The field fills the component's container, which fills its
/// parent; set `fullscreen = true` to size the canvas to the viewport.
/// Explicit `width`/`height` override automatic sizing. `children` are laid
/// out above the canvas and do not block pointer attraction.
#[component]
pub fn NeuralFieldCanvas(
	#[prop(into)] config: Signal<FieldConfig>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional)] children: Option<Children>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handles = Handles {
		context: Rc::new(RefCell::new(None)),
		animate: Rc::new(RefCell::new(None)),
		resize_cb: Rc::new(RefCell::new(None)),
		stop: StopHandle::new(),
	};
	let sizing = Sizing {
		fullscreen,
		width,
		height,
	};

	let stop_cleanup = handles.stop.clone();
	on_cleanup(move || stop_cleanup.stop());

	let handles_init = handles.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = mount_field(canvas, config.get(), sizing, &handles_init) {
			error!("neural-hero: cannot start neural field: {}", e);
		}
	});

	let context_mm = handles.context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = surface_point(
			(ev.client_x() as f64, ev.client_y() as f64),
			(rect.left(), rect.top()),
		);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.field.set_pointer(x, y);
		}
	};

	let context_ml = handles.context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.field.clear_pointer();
		}
	};

	view! {
		<div
			class="neural-field"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="position: relative; width: 100%; height: 100%;"
		>
			<canvas
				node_ref=canvas_ref
				class="neural-field-canvas"
				style="position: absolute; inset: 0; display: block;"
			/>
			<div class="neural-field-content" style="position: relative;">
				{children.map(|c| c())}
			</div>
		</div>
	}
}

/// Maps a viewport pointer position into surface coordinates, given the
/// surface's top-left corner in the viewport.
fn surface_point(client: (f64, f64), origin: (f64, f64)) -> (f64, f64) {
	(client.0 - origin.0, client.1 - origin.1)
}

/// Sizes the canvas, seeds the field and, on first mount, starts the
/// resize listener and the animation loop.
fn mount_field(
	canvas: HtmlCanvasElement,
	config: FieldConfig,
	sizing: Sizing,
	handles: &Handles,
) -> Result<(), CanvasError> {
	let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
	let (w, h) = surface_size(&window, &canvas, sizing);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let theme = Theme::named(&config.theme);
	let driver = FrameDriver::with_stop(config.tick_mode, handles.stop.clone());
	let field = ParticleField::new(w, h, config, theme.palette.clone());

	let running = handles.context.borrow().is_some();
	if running {
		*handles.context.borrow_mut() = Some(FieldContext {
			field,
			theme,
			driver,
		});
		info!("neural-hero: configuration changed, field re-seeded");
		return Ok(());
	}

	let mut ctx = context_2d(&canvas)?;
	*handles.context.borrow_mut() = Some(FieldContext {
		field,
		theme,
		driver,
	});

	let (context_resize, canvas_resize) = (handles.context.clone(), canvas.clone());
	*handles.resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let (nw, nh) = surface_size(&win, &canvas_resize, sizing);
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut c) = *context_resize.borrow_mut() {
			c.field.resize(nw, nh);
		}
	}));
	if let Some(ref cb) = *handles.resize_cb.borrow() {
		let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}

	let handles_anim = handles.clone();
	*handles.animate.borrow_mut() = Some(Closure::new(move |now: f64| {
		let keep_going = match *handles_anim.context.borrow_mut() {
			Some(ref mut c) => c.driver.frame(&mut c.field, &mut ctx, &c.theme, now),
			None => false,
		};
		if !keep_going {
			info!("neural-hero: animation stopped");
			teardown(&handles_anim);
			return;
		}
		if let (Some(cb), Some(win)) = (handles_anim.animate.borrow().as_ref(), web_sys::window()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *handles.animate.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
	Ok(())
}

/// Detaches the resize listener and drops the field and both callbacks.
///
/// Safe to call from inside the animation callback: dropping a running
/// wasm-bindgen closure is deferred until it returns.
fn teardown(handles: &Handles) {
	if let Some(cb) = handles.resize_cb.borrow_mut().take() {
		if let Some(win) = web_sys::window() {
			let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
	let _ = handles.context.borrow_mut().take();
	// Last: this may be the closure currently running.
	let _ = handles.animate.borrow_mut().take();
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.ok_or(CanvasError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| CanvasError::UnexpectedContext)
}

fn surface_size(window: &Window, canvas: &HtmlCanvasElement, sizing: Sizing) -> (f64, f64) {
	if sizing.fullscreen {
		let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		return (px(window.inner_width()), px(window.inner_height()));
	}
	let parent = canvas.parent_element();
	(
		sizing.width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		sizing.height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	)
}
