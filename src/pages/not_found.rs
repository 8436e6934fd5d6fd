use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="not-found">
			<h1 class="gradient-text">"404"</h1>
			<p>"This page does not exist."</p>
			<a class="btn btn-primary" href="/">"Back to the portfolio"</a>
		</main>
	}
}
