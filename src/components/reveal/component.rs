use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::state::Visibility;

/// Keeps the JS callback alive for as long as the observer may call it.
struct ObserverHandle {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverHandle {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// A page section whose children transition in once, the first time
/// `amount` of it is inside the viewport. With `immediate` it reveals on the
/// first frame after mount instead.
#[component]
pub fn Reveal(
	#[prop(optional)] id: Option<&'static str>,
	#[prop(into)] class: String,
	#[prop(default = 0.3)] amount: f64,
	#[prop(default = false)] immediate: bool,
	children: Children,
) -> impl IntoView {
	let section_ref = NodeRef::<leptos::html::Section>::new();
	let visibility = RwSignal::new(Visibility::Pending);
	let handle: Rc<RefCell<Option<ObserverHandle>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(section) = section_ref.get() else {
			return;
		};
		if immediate {
			request_animation_frame(move || visibility.set(Visibility::Shown));
			return;
		}
		if handle.borrow().is_some() || visibility.get_untracked().is_shown() {
			return;
		}

		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let entry: IntersectionObserverEntry = entry.unchecked_into();
					let next = visibility
						.get_untracked()
						.observe(entry.intersection_ratio(), amount);
					if next.is_shown() {
						visibility.set(next);
						observer.disconnect();
						break;
					}
				}
			},
		);

		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from_f64(amount));
		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
			Ok(observer) => {
				observer.observe(&section);
				*handle.borrow_mut() = Some(ObserverHandle {
					observer,
					_callback: callback,
				});
			}
			Err(err) => {
				log::warn!("IntersectionObserver unavailable ({err:?}), revealing section");
				visibility.set(Visibility::Shown);
			}
		}
	});

	view! {
		<section
			id=id
			node_ref=section_ref
			class=move || {
				if visibility.get().is_shown() {
					format!("{class} reveal is-revealed")
				} else {
					format!("{class} reveal")
				}
			}
		>
			{children()}
		</section>
	}
}
