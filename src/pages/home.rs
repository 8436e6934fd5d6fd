use leptos::prelude::*;

use crate::components::sections::{
	About, Contact, Footer, GitHubActivity, Hero, Projects, SkillTree, Skills,
};

/// The portfolio: every section, top to bottom.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main class="app">
			<Hero />
			<About />
			<Projects />
			<Skills />
			<SkillTree />
			<GitHubActivity />
			<Contact />
			<Footer />
		</main>
	}
}
