//! Page sections, in the order the home page mounts them.

mod about;
mod activity;
mod contact;
mod footer;
mod hero;
mod level_bar;
mod projects;
mod skill_tree;
mod skills;

pub use about::About;
pub use activity::GitHubActivity;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
pub use skill_tree::SkillTree;
pub use skills::Skills;

/// Inline custom properties for a `.gradient` element, from a pair of tone names.
fn gradient_style((from, to): (&str, &str)) -> String {
	format!("--g-from: var(--{from}); --g-to: var(--{to});")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn gradient_style_references_tone_variables() {
		assert_eq!(
			gradient_style(("cyan", "blue")),
			"--g-from: var(--cyan); --g-to: var(--blue);"
		);
	}
}
