use leptos::prelude::*;

use super::gradient_style;
use super::level_bar::LevelBar;
use crate::components::reveal::{Reveal, Transition};
use crate::content::profile::{
	ABOUT_HEADLINE, ABOUT_PARAGRAPHS, ACHIEVEMENTS, CORE_EXPERTISE, EXPERTISE_TAGS,
};

#[component]
pub fn About() -> impl IntoView {
	let (item, card) = (Transition::ITEM, Transition::CARD);

	let achievements = ACHIEVEMENTS
		.iter()
		.enumerate()
		.map(|(i, a)| {
			view! {
				<div class="card stat-card reveal-item" style=card.style(i)>
					<span class="icon">{a.icon.glyph()}</span>
					<div class="stat-card-value">{a.value}</div>
					<div class="stat-card-label">{a.label}</div>
				</div>
			}
		})
		.collect_view();

	let paragraphs = ABOUT_PARAGRAPHS
		.iter()
		.map(|p| view! { <p class="about-text">{*p}</p> })
		.collect_view();

	let bars = CORE_EXPERTISE
		.iter()
		.enumerate()
		.map(|(i, skill)| view! { <LevelBar skill=*skill index=i /> })
		.collect_view();

	let tags = EXPERTISE_TAGS
		.iter()
		.enumerate()
		.map(|(i, tag)| {
			view! {
				<div class="card tag-card reveal-item" style=card.style(i)>
					<div class="tag-card-icon gradient" style=gradient_style(tag.gradient)>
						<span class="icon">{tag.icon.glyph()}</span>
					</div>
					<h4>{tag.label}</h4>
					<p>{tag.description}</p>
					<span class="tag-card-specialty">{tag.specialty}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<Reveal id="about" class="section section-alt">
			<div class="container">
				<header class="section-header reveal-item" style=item.style(0)>
					<h2 class="gradient-text">"About Me"</h2>
					<p>"Passionate about creating secure, innovative, and impactful digital solutions"</p>
				</header>
				<div class="grid grid-4">{achievements}</div>
				<div class="grid grid-2">
					<div class="reveal-item" style=item.style(1)>
						<h3>{ABOUT_HEADLINE}</h3>
						{paragraphs}
						<h4>"Core Expertise"</h4>
						{bars}
					</div>
					<div class="grid grid-2">{tags}</div>
				</div>
			</div>
		</Reveal>
	}
}
