use crate::content::Icon;

/// Percentage coordinates inside the diagram canvas, each in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillNode {
	pub id: &'static str,
	pub name: &'static str,
	pub level: u8,
	pub category: &'static str,
	pub icon: Icon,
	pub color: &'static str,
	pub description: &'static str,
	pub position: Position,
}

/// Undirected display edge between two node ids.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
	pub from: &'static str,
	pub to: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct LegendEntry {
	pub category: &'static str,
	pub color: &'static str,
	pub icon: Icon,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillGraphData {
	pub nodes: &'static [SkillNode],
	pub connections: &'static [Connection],
}

impl SkillGraphData {
	pub fn node(&self, id: &str) -> Option<&'static SkillNode> {
		self.nodes.iter().find(|n| n.id == id)
	}
}
