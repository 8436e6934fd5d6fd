use leptos::prelude::*;

use crate::components::reveal::{Reveal, Transition};
use crate::content::Icon;
use crate::content::activity::{
	ActivityStats, MOCK_COMMITS, MOCK_REPOSITORIES, format_date, language_tone,
};

#[component]
pub fn GitHubActivity() -> impl IntoView {
	let stats = ActivityStats::compute(MOCK_REPOSITORIES, MOCK_COMMITS);
	let card = Transition::CARD;

	let stat_cards = [
		(Icon::Code, "Total Repos", stats.total_repos, "cyan"),
		(Icon::Star, "Total Stars", stats.total_stars, "yellow"),
		(Icon::Branch, "Total Forks", stats.total_forks, "green"),
		(Icon::Calendar, "Recent Commits", stats.recent_commits, "purple"),
	]
	.into_iter()
	.enumerate()
	.map(|(i, (icon, label, value, tone))| {
		view! {
			<div class=format!("card stat-card tone-{tone} reveal-item") style=card.style(i)>
				<span class="icon">{icon.glyph()}</span>
				<div class="stat-card-value">{value}</div>
				<div class="stat-card-label">{label}</div>
			</div>
		}
	})
	.collect_view();

	let repos = MOCK_REPOSITORIES
		.iter()
		.map(|repo| {
			let topics = repo
				.topics
				.iter()
				.map(|t| view! { <span class="chip chip-muted">{*t}</span> })
				.collect_view();
			view! {
				<a class="activity-item" href=repo.html_url target="_blank" rel="noopener noreferrer">
					<div class="activity-item-heading">
						<h4>{repo.name}</h4>
						<span class=format!("activity-language tone-{}", language_tone(repo.language))>
							{repo.language}
						</span>
					</div>
					<p>{repo.description}</p>
					<div class="activity-meta">
						<span>{Icon::Star.glyph()} " " {repo.stargazers_count}</span>
						<span>{Icon::Branch.glyph()} " " {repo.forks_count}</span>
						<span>{format_date(repo.updated_at)}</span>
					</div>
					<div class="chips">{topics}</div>
				</a>
			}
		})
		.collect_view();

	let commits = MOCK_COMMITS
		.iter()
		.map(|commit| {
			view! {
				<div class="activity-item">
					<p class="activity-commit-message">{commit.message}</p>
					<div class="activity-meta">
						<code>{commit.sha}</code>
						<span>{commit.repo}</span>
						<span>{format_date(commit.date)}</span>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<Reveal id="github" class="section">
			<div class="container">
				<header class="section-header reveal-item" style=Transition::ITEM.style(0)>
					<h2 class="gradient-text">"GitHub Activity"</h2>
					<p>"My latest contributions, repositories, and coding activity"</p>
				</header>
				<div class="grid grid-4">{stat_cards}</div>
				<div class="grid grid-2">
					<div class="card reveal-item" style=card.style(4)>
						<h3>"Recent Repositories"</h3>
						{repos}
					</div>
					<div class="card reveal-item" style=card.style(5)>
						<h3>"Recent Commits"</h3>
						{commits}
					</div>
				</div>
			</div>
		</Reveal>
	}
}
