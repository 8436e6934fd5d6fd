use leptos::prelude::*;

use crate::components::scroll::scroll_to_top;
use crate::content::profile::COPYRIGHT;

#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="footer">
			<button class="footer-top" aria-label="Back to top" on:click=|_| scroll_to_top()>
				"\u{2191}"
			</button>
			<div class="container">
				<p class="footer-copy">{COPYRIGHT}</p>
			</div>
		</footer>
	}
}
