mod component;
mod render;
mod state;
mod types;

pub use component::SkillGraph;
pub use types::{Connection, LegendEntry, Position, SkillGraphData, SkillNode};
