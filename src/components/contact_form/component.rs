use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Event, SubmitEvent};

use super::relay::EmailRelay;
use super::state::{ContactForm, Field, FormStore, SubmitStatus, submit};
use crate::config::RelayConfig;

impl FormStore for RwSignal<ContactForm> {
	fn with_form<U>(&self, f: impl FnOnce(&mut ContactForm) -> U) -> Option<U> {
		self.try_update(f)
	}
}

/// Name / email / message form that posts through the email relay.
#[component]
pub fn MessageForm(#[prop(optional)] config: Option<RelayConfig>) -> impl IntoView {
	let form = RwSignal::new(ContactForm::default());
	let relay = EmailRelay::new(config.unwrap_or_default());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let relay = relay.clone();
		spawn_local(async move {
			submit(&form, &relay).await;
		});
	};

	let value = move |field: Field| form.with(|f| f.field(field).to_string());
	let set = move |field: Field, ev: Event| {
		form.update(|f| f.set_field(field, event_target_value(&ev)));
	};
	let submitting = move || form.with(ContactForm::is_submitting);

	view! {
		<form class="contact-form" on:submit=on_submit>
			<div class="form-field">
				<label for="name">"Full Name"</label>
				<input
					type="text"
					id="name"
					name="name"
					required
					placeholder="Your Name"
					prop:value=move || value(Field::Name)
					on:input=move |ev| set(Field::Name, ev)
				/>
			</div>
			<div class="form-field">
				<label for="email">"Email Address"</label>
				<input
					type="email"
					id="email"
					name="email"
					required
					placeholder="your.email@example.com"
					prop:value=move || value(Field::Email)
					on:input=move |ev| set(Field::Email, ev)
				/>
			</div>
			<div class="form-field">
				<label for="message">"Project Details"</label>
				<textarea
					id="message"
					name="message"
					required
					rows="6"
					placeholder="Tell me about your project, requirements, timeline, and budget..."
					prop:value=move || value(Field::Message)
					on:input=move |ev| set(Field::Message, ev)
				></textarea>
			</div>
			<button type="submit" class="btn btn-primary" disabled=submitting>
				{move || if submitting() { "Sending..." } else { "Send Message" }}
			</button>
			{move || {
				form.with(ContactForm::status)
					.map(|status| {
						let class = match status {
							SubmitStatus::Sent => "form-status is-sent",
							SubmitStatus::Failed => "form-status is-failed",
						};
						view! { <p class=class role="status">{status.message()}</p> }
					})
			}}
		</form>
	}
}
