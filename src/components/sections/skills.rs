use leptos::prelude::*;

use super::gradient_style;
use super::level_bar::LevelBar;
use crate::components::reveal::{Reveal, Transition};
use crate::content::skills::{HIGHLIGHTS, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> impl IntoView {
	let card = Transition::CARD;

	let categories = SKILL_CATEGORIES
		.iter()
		.enumerate()
		.map(|(i, category)| {
			let bars = category
				.skills
				.iter()
				.enumerate()
				.map(|(j, skill)| view! { <LevelBar skill=*skill index=j /> })
				.collect_view();
			view! {
				<div class="card skill-card reveal-item" style=card.style(i)>
					<div class="skill-card-heading">
						<div class="skill-card-icon gradient" style=gradient_style(category.gradient)>
							<span class="icon">{category.icon.glyph()}</span>
						</div>
						<h3>{category.title}</h3>
					</div>
					{bars}
				</div>
			}
		})
		.collect_view();

	let highlights = HIGHLIGHTS
		.iter()
		.enumerate()
		.map(|(i, h)| {
			view! {
				<div class="card stat-card reveal-item" style=card.style(SKILL_CATEGORIES.len() + i)>
					<span class="icon">{h.icon.glyph()}</span>
					<div class="stat-card-label">{h.label}</div>
					<div class="stat-card-value">{h.value}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<Reveal id="skills" class="section" amount=0.1>
			<div class="container">
				<header class="section-header reveal-item" style=Transition::ITEM.style(0)>
					<h2 class="gradient-text">"Skills & Expertise"</h2>
					<p>"A comprehensive toolkit for building secure, scalable, and innovative solutions"</p>
				</header>
				<div class="grid grid-3">{categories}</div>
				<div class="grid grid-4">{highlights}</div>
			</div>
		</Reveal>
	}
}
