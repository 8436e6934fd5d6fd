use leptos::prelude::*;

use super::gradient_style;
use crate::components::reveal::{Reveal, Transition};
use crate::content::profile::GITHUB_PROFILE;
use crate::content::projects::{PROJECTS, Project};

fn project_card(project: &'static Project, index: usize) -> impl IntoView {
	let stats = project
		.stats
		.iter()
		.map(|(key, value)| {
			view! {
				<div class="project-stat">
					<div class="project-stat-value">{*value}</div>
					<div class="project-stat-key">{*key}</div>
				</div>
			}
		})
		.collect_view();
	let features = project
		.features
		.iter()
		.map(|f| view! { <span class="chip">{*f}</span> })
		.collect_view();
	let tech = project
		.tech_stack
		.iter()
		.map(|t| view! { <span class="chip chip-muted">{*t}</span> })
		.collect_view();

	view! {
		<article class="card project-card reveal-item" style=Transition::SHOWCASE.style(index)>
			<a class="project-media" href=project.live_link target="_blank" rel="noopener noreferrer">
				<img src=project.image alt=project.title loading="lazy" />
				<div class="project-overlay gradient" style=gradient_style(project.gradient)>
					<div class="project-stats">{stats}</div>
					<span class="project-visit">"Click to visit live site \u{2192}"</span>
				</div>
			</a>
			<div class="project-body">
				<div class="project-heading">
					<div>
						<span class="project-category">{project.category}</span>
						<h3>{project.title}</h3>
					</div>
					<div class="project-links">
						<a href=project.live_link target="_blank" rel="noopener noreferrer" aria-label="Live demo">
							"\u{25B6}"
						</a>
						<a href=project.github_link target="_blank" rel="noopener noreferrer" aria-label="Source">
							"\u{2325}"
						</a>
					</div>
				</div>
				<p>{project.description}</p>
				<div class="chips">{features}</div>
				<div class="chips">{tech}</div>
			</div>
		</article>
	}
}

#[component]
pub fn Projects() -> impl IntoView {
	let cards = PROJECTS
		.iter()
		.enumerate()
		.map(|(i, project)| project_card(project, i))
		.collect_view();

	view! {
		<Reveal id="projects" class="section section-alt">
			<div class="container">
				<header class="section-header reveal-item" style=Transition::ITEM.style(0)>
					<h2 class="gradient-text">"Featured Projects"</h2>
					<p>"Showcasing my latest work and innovative solutions across various technologies"</p>
				</header>
				<div class="grid grid-2">{cards}</div>
				<div class="section-footer reveal-item" style=Transition::ITEM.style(1)>
					<a class="btn btn-outline" href=GITHUB_PROFILE target="_blank" rel="noopener noreferrer">
						"View All Projects \u{2197}"
					</a>
				</div>
			</div>
		</Reveal>
	}
}
