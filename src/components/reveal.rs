//! Page glue: smooth in-page anchor scrolling and fade-in of sections as they
//! scroll into view.
//!
//! Both operate on the static page markup rather than on Leptos views, so
//! they attach plain DOM listeners that live for the page's lifetime.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, Event, IntersectionObserver, IntersectionObserverEntry, ScrollBehavior,
	ScrollIntoViewOptions,
};

/// Class applied to every watched element until it is revealed.
pub const HIDDEN_CLASS: &str = "hidden";
/// Class added once a watched element intersects the viewport.
pub const SHOW_CLASS: &str = "show";

/// Class to add for an intersection change. Elements are never hidden again
/// once shown.
pub fn reveal_class(is_intersecting: bool) -> Option<&'static str> {
	is_intersecting.then_some(SHOW_CLASS)
}

/// Selector for an in-page anchor's target, `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
	(href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Installs both behaviors on the current document.
pub fn install(selector: &str) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	install_smooth_anchors(&document);
	install_reveal_on_scroll(&document, selector);
}

fn elements(document: &Document, selector: &str) -> Vec<Element> {
	let Ok(list) = document.query_selector_all(selector) else {
		warn!("starlit: invalid selector {:?}", selector);
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

fn install_smooth_anchors(document: &Document) {
	let anchors = elements(document, "a[href^=\"#\"]");
	debug!("starlit: smooth scrolling {} anchors", anchors.len());

	for anchor in anchors {
		let (doc, link) = (document.clone(), anchor.clone());
		let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
			ev.prevent_default();
			let Some(href) = link.get_attribute("href") else {
				return;
			};
			let Some(selector) = anchor_target(&href) else {
				return;
			};
			if let Ok(Some(target)) = doc.query_selector(selector) {
				let options = ScrollIntoViewOptions::new();
				options.set_behavior(ScrollBehavior::Smooth);
				target.scroll_into_view_with_scroll_into_view_options(&options);
			}
		});
		let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
		on_click.forget();
	}
}

fn install_reveal_on_scroll(document: &Document, selector: &str) {
	let targets = elements(document, selector);
	if targets.is_empty() {
		return;
	}

	let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
		for entry in entries.iter() {
			let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
				continue;
			};
			if let Some(class) = reveal_class(entry.is_intersecting()) {
				let _ = entry.target().class_list().add_1(class);
			}
		}
	});
	let observer = match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
		Ok(observer) => observer,
		Err(e) => {
			warn!("starlit: IntersectionObserver unavailable: {:?}", e);
			return;
		}
	};
	on_intersect.forget();

	debug!("starlit: revealing {} elements on scroll", targets.len());
	for el in &targets {
		let _ = el.class_list().add_1(HIDDEN_CLASS);
		observer.observe(el);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_intersecting_elements_are_shown() {
		assert_eq!(reveal_class(true), Some("show"));
		assert_eq!(reveal_class(false), None);
	}

	#[test]
	fn anchor_targets() {
		assert_eq!(anchor_target("#projects"), Some("#projects"));
		assert_eq!(anchor_target("#"), None);
		assert_eq!(anchor_target("/about"), None);
	}
}
