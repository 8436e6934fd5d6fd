use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smooth-scrolls the element with `id` into view. Missing targets are logged
/// and ignored.
pub fn scroll_to_section(id: &str) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		log::warn!("no section with id `{id}` to scroll to");
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
	let Some(window) = web_sys::window() else {
		log::warn!("no window to scroll");
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(0.0);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}
