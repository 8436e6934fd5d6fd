use leptos::prelude::*;

use crate::components::reveal::{Reveal, Transition};
use crate::components::skill_graph::SkillGraph;
use crate::content::skill_graph::{SKILL_GRAPH, SKILL_LEGEND};

#[component]
pub fn SkillTree() -> impl IntoView {
	view! {
		<Reveal id="skill-tree" class="section section-alt" amount=0.1>
			<div class="container">
				<header class="section-header reveal-item" style=Transition::ITEM.style(0)>
					<h2 class="gradient-text">"Skill Tree"</h2>
					<p>"Interactive visualization of my interconnected skills and expertise"</p>
				</header>
				<div class="reveal-item" style=Transition::NODE.style(1)>
					<SkillGraph data=SKILL_GRAPH legend=SKILL_LEGEND />
				</div>
			</div>
		</Reveal>
	}
}
