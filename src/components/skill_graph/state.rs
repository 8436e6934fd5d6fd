/// Transient hover/select state for the diagram.
///
/// Lives for as long as the component is mounted; nothing here is persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
	hovered: Option<&'static str>,
	selected: Option<&'static str>,
}

impl InteractionState {
	pub fn pointer_enter(&mut self, id: &'static str) {
		self.hovered = Some(id);
	}

	pub fn pointer_leave(&mut self, id: &'static str) {
		// A leave that arrives after the pointer already entered a neighbour
		// must not clear the neighbour's hover.
		if self.hovered == Some(id) {
			self.hovered = None;
		}
	}

	pub fn click(&mut self, id: &'static str) {
		self.selected = if self.selected == Some(id) {
			None
		} else {
			Some(id)
		};
	}

	pub fn is_hovered(&self, id: &str) -> bool {
		self.hovered == Some(id)
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected == Some(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hovering_a_second_node_moves_the_tooltip() {
		let mut state = InteractionState::default();
		state.pointer_enter("react");
		state.pointer_enter("typescript");
		assert!(state.is_hovered("typescript"));
		assert!(!state.is_hovered("react"));
	}

	#[test]
	fn stale_leave_keeps_current_hover() {
		let mut state = InteractionState::default();
		state.pointer_enter("react");
		state.pointer_enter("typescript");
		state.pointer_leave("react");
		assert!(state.is_hovered("typescript"));

		state.pointer_leave("typescript");
		assert_eq!(state, InteractionState::default());
	}

	#[test]
	fn double_click_restores_selection() {
		let mut state = InteractionState::default();
		state.click("python");
		assert!(state.is_selected("python"));
		state.click("python");
		assert_eq!(state, InteractionState::default());

		state.click("ai");
		state.click("ai");
		state.click("ai");
		assert!(state.is_selected("ai"));
	}

	#[test]
	fn clicking_another_node_moves_selection() {
		let mut state = InteractionState::default();
		state.click("ai");
		state.click("security");
		assert!(state.is_selected("security"));
		assert!(!state.is_selected("ai"));
	}

	#[test]
	fn unknown_ids_are_accepted() {
		let mut state = InteractionState::default();
		state.pointer_enter("cobol");
		assert!(state.is_hovered("cobol"));
		state.pointer_leave("cobol");
		assert!(!state.is_hovered("cobol"));
	}
}
