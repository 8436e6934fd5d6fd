use leptos::prelude::*;

use super::render::{self, connection_lines};
use super::state::InteractionState;
use super::types::{LegendEntry, SkillGraphData};

/// Skill-relationship diagram: positioned node markers over an SVG layer of
/// connection lines. Hover shows a node's tooltip, click toggles emphasis.
#[component]
pub fn SkillGraph(
	data: SkillGraphData,
	#[prop(default = &[])] legend: &'static [LegendEntry],
) -> impl IntoView {
	let state = RwSignal::new(InteractionState::default());

	let lines = connection_lines(&data)
		.into_iter()
		.map(|line| {
			view! {
				<line
					class="skill-link"
					x1=render::percent(line.from.x)
					y1=render::percent(line.from.y)
					x2=render::percent(line.to.x)
					y2=render::percent(line.to.y)
					stroke="url(#skill-link-gradient)"
					stroke-width="2"
					style=line.style()
				/>
			}
		})
		.collect_view();

	let nodes = data
		.nodes
		.iter()
		.map(|node| {
			let id = node.id;
			view! {
				<div
					class=move || state.with(|s| render::marker_class(node, s))
					style:left=render::percent(node.position.x)
					style:top=render::percent(node.position.y)
					on:mouseenter=move |_| state.update(|s| s.pointer_enter(id))
					on:mouseleave=move |_| state.update(|s| s.pointer_leave(id))
					on:click=move |_| state.update(|s| s.click(id))
				>
					<div class="skill-node-body">
						<span class="icon">{node.icon.glyph()}</span>
					</div>
					<div class="skill-level">{node.level}</div>
					<div class=move || state.with(|s| render::tooltip_class(node, s)) role="tooltip">
						<div class="skill-tooltip-name">{node.name}</div>
						<div class="skill-tooltip-category">{node.category}</div>
						<div class="skill-tooltip-description">{node.description}</div>
					</div>
				</div>
			}
		})
		.collect_view();

	let legend = legend
		.iter()
		.map(|entry| {
			view! {
				<div class=format!("skill-legend-item tone-{}", entry.color)>
					<span class="skill-legend-dot"></span>
					<span class="icon">{entry.icon.glyph()}</span>
					<span>{entry.category}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="skill-graph">
			<svg class="skill-links" aria-hidden="true">
				<defs>
					<linearGradient id="skill-link-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
						<stop offset="0%" stop-color="#06b6d4" />
						<stop offset="100%" stop-color="#3b82f6" />
					</linearGradient>
				</defs>
				{lines}
			</svg>
			{nodes}
		</div>
		<div class="skill-legend">{legend}</div>
		<p class="skill-graph-hint">
			"Hover over nodes to see details \u{2022} Click to select \u{2022} Lines show skill relationships"
		</p>
	}
}
