use leptos::prelude::*;

use crate::components::reveal::{Reveal, Transition};
use crate::components::scroll::scroll_to_section;
use crate::content::profile::{HEADLINE_STATS, NAME, RESUME_URL, ROLES, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
	let t = Transition::HERO;

	let roles = ROLES
		.iter()
		.enumerate()
		.map(|(i, role)| {
			view! {
				{(i > 0).then(|| view! { <span class="hero-role-sep">"\u{2022}"</span> })}
				<span class=format!("hero-role tone-{}", role.tone)>
					<span class="icon">{role.icon.glyph()}</span>
					<span class="wide-only">{role.full}</span>
					<span class="narrow-only">{role.short}</span>
				</span>
			}
		})
		.collect_view();

	let stats = HEADLINE_STATS
		.iter()
		.map(|stat| {
			view! {
				<div class="hero-stat">
					<div class=format!("hero-stat-value tone-{}", stat.tone)>{stat.value}</div>
					<div class="hero-stat-label">{stat.label}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<Reveal class="hero" immediate=true>
			<div class="container hero-inner">
				<h1 class="hero-title gradient-text reveal-item" style=Transition::TITLE.style(0)>
					{NAME}
				</h1>
				<div class="hero-roles reveal-item" style=t.style(1)>{roles}</div>
				<p class="hero-tagline reveal-item" style=t.style(2)>{TAGLINE}</p>
				<div class="hero-actions reveal-item" style=t.style(3)>
					<button class="btn btn-primary" on:click=|_| scroll_to_section("projects")>
						"View Projects"
					</button>
					<button class="btn btn-outline" on:click=|_| scroll_to_section("contact")>
						"Contact Me"
					</button>
					<a class="btn btn-ghost" href=RESUME_URL download="">
						"Download Resume"
					</a>
				</div>
				<div class="hero-stats reveal-item" style=t.style(4)>{stats}</div>
			</div>
			<button class="hero-scroll-hint" aria-label="Scroll to about" on:click=|_| scroll_to_section("about")>
				"\u{2304}"
			</button>
		</Reveal>
	}
}
