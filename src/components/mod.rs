pub mod contact_form;
pub mod reveal;
mod scroll;
pub mod sections;
pub mod skill_graph;
