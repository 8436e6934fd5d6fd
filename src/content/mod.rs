//! Compiled-in page content, kept apart from the components that render it.

pub mod activity;
pub mod contact;
mod icon;
pub mod profile;
pub mod projects;
pub mod skill_graph;
pub mod skills;

pub use icon::Icon;
