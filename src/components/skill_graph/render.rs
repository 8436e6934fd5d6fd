use super::state::InteractionState;
use super::types::{Position, SkillGraphData, SkillNode};

/// Seconds between successive connection lines drawing in.
pub const LINE_STAGGER: f64 = 0.2;
pub const LINE_DRAW_DURATION: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
	pub from: Position,
	pub to: Position,
	pub delay: f64,
}

impl Line {
	pub fn style(&self) -> String {
		format!(
			"animation-delay: {:.1}s; animation-duration: {:.1}s;",
			self.delay, LINE_DRAW_DURATION
		)
	}
}

/// Resolves every connection to a line between its endpoints' stored
/// coordinates. Connections naming a missing node are dropped.
///
/// The stagger delay follows the connection's index in the table, so a
/// dropped line leaves a gap in the draw-in sequence rather than shifting
/// the ones after it.
pub fn connection_lines(data: &SkillGraphData) -> Vec<Line> {
	data.connections
		.iter()
		.enumerate()
		.filter_map(|(i, link)| {
			match (data.node(link.from), data.node(link.to)) {
				(Some(from), Some(to)) => Some(Line {
					from: from.position,
					to: to.position,
					delay: i as f64 * LINE_STAGGER,
				}),
				_ => {
					log::debug!("skipping connection {} -> {}", link.from, link.to);
					None
				}
			}
		})
		.collect()
}

pub fn percent(v: f64) -> String {
	format!("{}%", v)
}

pub fn marker_class(node: &SkillNode, state: &InteractionState) -> String {
	let mut class = format!("skill-node tone-{}", node.color);
	if state.is_hovered(node.id) {
		class.push_str(" is-hovered");
	}
	if state.is_selected(node.id) {
		class.push_str(" is-selected");
	}
	class
}

pub fn tooltip_class(node: &SkillNode, state: &InteractionState) -> &'static str {
	if state.is_hovered(node.id) {
		"skill-tooltip is-visible"
	} else {
		"skill-tooltip"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::skill_graph::Connection;
	use crate::content::Icon;
	use crate::content::skill_graph::SKILL_GRAPH;

	const fn node(id: &'static str, x: f64, y: f64) -> SkillNode {
		SkillNode {
			id,
			name: id,
			level: 50,
			category: "Test",
			icon: Icon::Code,
			color: "cyan",
			description: "",
			position: Position { x, y },
		}
	}

	const NODES: &[SkillNode] = &[node("a", 10.0, 20.0), node("b", 30.0, 40.0), node("c", 90.0, 5.0)];

	#[test]
	fn every_table_connection_resolves() {
		let lines = connection_lines(&SKILL_GRAPH);
		assert_eq!(lines.len(), SKILL_GRAPH.connections.len());

		for (line, link) in lines.iter().zip(SKILL_GRAPH.connections) {
			let from = SKILL_GRAPH.node(link.from).unwrap().position;
			let to = SKILL_GRAPH.node(link.to).unwrap().position;
			assert_eq!(line.from, from);
			assert_eq!(line.to, to);
		}
	}

	#[test]
	fn missing_endpoint_drops_only_that_line() {
		const LINKS: &[Connection] = &[
			Connection { from: "a", to: "b" },
			Connection { from: "a", to: "ghost" },
			Connection { from: "nobody", to: "c" },
			Connection { from: "b", to: "c" },
		];
		let data = SkillGraphData { nodes: NODES, connections: LINKS };
		let lines = connection_lines(&data);

		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0].from, Position { x: 10.0, y: 20.0 });
		assert_eq!(lines[0].to, Position { x: 30.0, y: 40.0 });
		assert_eq!(lines[1].from, Position { x: 30.0, y: 40.0 });
		assert_eq!(lines[1].to, Position { x: 90.0, y: 5.0 });
		assert!((lines[1].delay - 3.0 * LINE_STAGGER).abs() < 1e-9);
	}

	#[test]
	fn tooltip_follows_hover_only() {
		let mut state = InteractionState::default();
		state.pointer_enter("a");
		state.click("b");

		assert_eq!(tooltip_class(&NODES[0], &state), "skill-tooltip is-visible");
		assert_eq!(tooltip_class(&NODES[1], &state), "skill-tooltip");
		assert!(marker_class(&NODES[1], &state).contains("is-selected"));
		assert!(!marker_class(&NODES[2], &state).contains("is-"));
	}

	#[test]
	fn coordinates_render_as_percentages() {
		assert_eq!(percent(50.0), "50%");
		assert_eq!(percent(12.5), "12.5%");
	}
}
