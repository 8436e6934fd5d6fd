use leptos::prelude::*;

use crate::content::profile::Proficiency;

/// Labelled percentage bar. The fill grows to `level%` once the enclosing
/// section is revealed.
#[component]
pub fn LevelBar(skill: Proficiency, #[prop(default = 0)] index: usize) -> impl IntoView {
	let fill_style = format!(
		"--level: {}%; --reveal-delay: {:.1}s;",
		skill.level,
		index as f64 * 0.1
	);
	view! {
		<div class=format!("level-bar tone-{}", skill.tone)>
			<div class="level-bar-header">
				<span class="level-bar-name">{skill.name}</span>
				<span class="level-bar-value">{format!("{}%", skill.level)}</span>
			</div>
			<div class="level-bar-track">
				<div class="level-bar-fill" style=fill_style></div>
			</div>
		</div>
	}
}
