use std::cell::RefCell;

use super::relay::{Ack, Relay, RelayError, Submission};

pub const SENT_MESSAGE: &str = "Thank you for your message. I will get back to you soon!";
pub const FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	Name,
	Email,
	Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
	Sent,
	Failed,
}

impl SubmitStatus {
	pub fn message(self) -> &'static str {
		match self {
			SubmitStatus::Sent => SENT_MESSAGE,
			SubmitStatus::Failed => FAILED_MESSAGE,
		}
	}
}

/// Field values plus the single-flight `submitting` flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
	name: String,
	email: String,
	message: String,
	submitting: bool,
	status: Option<SubmitStatus>,
}

impl ContactForm {
	pub fn field(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Email => &self.email,
			Field::Message => &self.message,
		}
	}

	pub fn set_field(&mut self, field: Field, value: String) {
		match field {
			Field::Name => self.name = value,
			Field::Email => self.email = value,
			Field::Message => self.message = value,
		}
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting
	}

	pub fn status(&self) -> Option<SubmitStatus> {
		self.status
	}

	/// Mirrors the inputs' `required` attribute: every field is non-empty.
	pub fn is_complete(&self) -> bool {
		[&self.name, &self.email, &self.message]
			.iter()
			.all(|v| !v.is_empty())
	}

	/// Claims the in-flight slot and snapshots the fields. Returns `None`
	/// while another submission is outstanding or a field is empty.
	pub fn begin_submit(&mut self) -> Option<Submission> {
		if self.submitting || !self.is_complete() {
			return None;
		}
		self.submitting = true;
		self.status = None;
		Some(Submission {
			name: self.name.clone(),
			email: self.email.clone(),
			message: self.message.clone(),
		})
	}

	/// Releases the in-flight slot. Fields are cleared only on success so a
	/// failed send keeps the user's input.
	pub fn finish(&mut self, outcome: &Result<Ack, RelayError>) {
		self.submitting = false;
		match outcome {
			Ok(_) => {
				self.name.clear();
				self.email.clear();
				self.message.clear();
				self.status = Some(SubmitStatus::Sent);
			}
			Err(_) => self.status = Some(SubmitStatus::Failed),
		}
	}
}

/// Where a [`ContactForm`] lives. The page keeps it in a reactive signal;
/// tests keep it in a `RefCell`.
pub trait FormStore {
	/// Runs `f` against the form, or returns `None` if it is gone.
	fn with_form<U>(&self, f: impl FnOnce(&mut ContactForm) -> U) -> Option<U>;
}

impl FormStore for RefCell<ContactForm> {
	fn with_form<U>(&self, f: impl FnOnce(&mut ContactForm) -> U) -> Option<U> {
		Some(f(&mut self.borrow_mut()))
	}
}

/// Sends the form through `relay` once. A call made while a previous one is
/// still in flight does nothing and returns `None`.
pub async fn submit<S, R>(store: &S, relay: &R) -> Option<SubmitStatus>
where
	S: FormStore,
	R: Relay,
{
	let submission = store.with_form(ContactForm::begin_submit).flatten()?;
	log::info!("sending contact message from {}", submission.email);

	let outcome = relay.send(&submission).await;
	match &outcome {
		Ok(ack) => log::debug!("relay accepted message: {}", ack.detail),
		Err(err) => log::error!("Error sending email: {err}"),
	}
	store
		.with_form(|form| {
			form.finish(&outcome);
			form.status
		})
		.flatten()
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	/// Yields once before answering so concurrent callers overlap.
	struct MockRelay {
		calls: Cell<usize>,
		fail: bool,
	}

	impl MockRelay {
		fn new(fail: bool) -> Self {
			Self {
				calls: Cell::new(0),
				fail,
			}
		}
	}

	impl Relay for MockRelay {
		async fn send(&self, _submission: &Submission) -> Result<Ack, RelayError> {
			self.calls.set(self.calls.get() + 1);
			tokio::task::yield_now().await;
			if self.fail {
				Err(RelayError::Rejected {
					status: 503,
					body: "unavailable".into(),
				})
			} else {
				Ok(Ack { detail: "OK".into() })
			}
		}
	}

	fn filled() -> RefCell<ContactForm> {
		let mut form = ContactForm::default();
		form.set_field(Field::Name, "Ada".into());
		form.set_field(Field::Email, "ada@example.com".into());
		form.set_field(Field::Message, "Let's build something".into());
		RefCell::new(form)
	}

	#[tokio::test]
	async fn success_clears_fields() {
		let store = filled();
		let relay = MockRelay::new(false);

		assert_eq!(submit(&store, &relay).await, Some(SubmitStatus::Sent));

		let form = store.borrow();
		assert_eq!(form.field(Field::Name), "");
		assert_eq!(form.field(Field::Email), "");
		assert_eq!(form.field(Field::Message), "");
		assert!(!form.is_submitting());
		assert_eq!(form.status().map(SubmitStatus::message), Some(SENT_MESSAGE));
	}

	#[tokio::test]
	async fn failure_keeps_fields() {
		let store = filled();
		let before = store.borrow().clone();
		let relay = MockRelay::new(true);

		assert_eq!(submit(&store, &relay).await, Some(SubmitStatus::Failed));

		let form = store.borrow();
		assert_eq!(form.field(Field::Name), before.field(Field::Name));
		assert_eq!(form.field(Field::Email), before.field(Field::Email));
		assert_eq!(form.field(Field::Message), before.field(Field::Message));
		assert!(!form.is_submitting());
		assert_eq!(form.status().map(SubmitStatus::message), Some(FAILED_MESSAGE));
	}

	#[tokio::test]
	async fn second_submit_while_in_flight_is_ignored() {
		let store = filled();
		let relay = MockRelay::new(false);

		let (first, second) = tokio::join!(submit(&store, &relay), submit(&store, &relay));

		assert_eq!(first, Some(SubmitStatus::Sent));
		assert_eq!(second, None);
		assert_eq!(relay.calls.get(), 1);
	}

	#[tokio::test]
	async fn empty_field_is_not_sent() {
		let store = filled();
		store.borrow_mut().set_field(Field::Email, String::new());
		let relay = MockRelay::new(false);

		assert_eq!(submit(&store, &relay).await, None);
		assert_eq!(relay.calls.get(), 0);
		assert!(!store.borrow().is_submitting());
	}

	#[tokio::test]
	async fn whitespace_message_is_sent_as_typed() {
		let store = filled();
		store.borrow_mut().set_field(Field::Message, "  \n ".into());
		let relay = MockRelay::new(false);

		assert_eq!(submit(&store, &relay).await, Some(SubmitStatus::Sent));
		assert_eq!(relay.calls.get(), 1);
		assert_eq!(store.borrow().status(), Some(SubmitStatus::Sent));
	}

	#[test]
	fn begin_submit_claims_the_slot() {
		let store = filled();
		let mut form = store.into_inner();
		assert!(form.begin_submit().is_some());
		assert!(form.is_submitting());
		assert_eq!(form.begin_submit(), None);

		form.finish(&Ok(Ack { detail: "OK".into() }));
		assert!(!form.is_submitting());
	}
}
