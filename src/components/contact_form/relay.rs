//! Outbound email relay.

use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;

/// The three user-entered fields, captured at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
	pub name: String,
	pub email: String,
	pub message: String,
}

/// Relay acknowledgement; `detail` is the relay's response body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ack {
	pub detail: String,
}

#[derive(Debug, Error)]
pub enum RelayError {
	#[error("relay request failed: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("relay rejected the message (HTTP {status}): {body}")]
	Rejected { status: u16, body: String },
}

/// Something that can deliver a [`Submission`]. One call, one attempt.
pub trait Relay {
	fn send(&self, submission: &Submission) -> impl Future<Output = Result<Ack, RelayError>>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
	service_id: &'a str,
	template_id: &'a str,
	user_id: &'a str,
	template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
	from_name: &'a str,
	to_name: &'a str,
	from_email: &'a str,
	message: &'a str,
}

/// EmailJS REST relay.
#[derive(Clone, Debug)]
pub struct EmailRelay {
	client: reqwest::Client,
	config: RelayConfig,
}

impl EmailRelay {
	pub fn new(config: RelayConfig) -> Self {
		Self {
			client: reqwest::Client::new(),
			config,
		}
	}

	fn request<'a>(&'a self, submission: &'a Submission) -> SendRequest<'a> {
		SendRequest {
			service_id: &self.config.service_id,
			template_id: &self.config.template_id,
			user_id: &self.config.public_key,
			template_params: TemplateParams {
				from_name: &submission.name,
				to_name: &self.config.recipient,
				from_email: &submission.email,
				message: &submission.message,
			},
		}
	}
}

impl Relay for EmailRelay {
	async fn send(&self, submission: &Submission) -> Result<Ack, RelayError> {
		log::debug!("posting contact message to {}", self.config.endpoint);

		let response = self
			.client
			.post(&self.config.endpoint)
			.json(&self.request(submission))
			.send()
			.await?;

		let status = response.status();
		let detail = response.text().await?;
		if status.is_success() {
			Ok(Ack { detail })
		} else {
			Err(RelayError::Rejected {
				status: status.as_u16(),
				body: detail,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn submission() -> Submission {
		Submission {
			name: "Ada".into(),
			email: "ada@example.com".into(),
			message: "Hello \"there\"".into(),
		}
	}

	#[test]
	fn request_carries_fixed_ids_and_fields() {
		let relay = EmailRelay::new(RelayConfig {
			endpoint: "http://localhost/send".into(),
			service_id: "svc".into(),
			template_id: "tpl".into(),
			public_key: "key".into(),
			recipient: "Pranav".into(),
		});
		let submission = submission();
		let json = serde_json::to_value(relay.request(&submission)).unwrap();

		assert_eq!(json["service_id"], "svc");
		assert_eq!(json["template_id"], "tpl");
		assert_eq!(json["user_id"], "key");
		assert_eq!(json["template_params"]["to_name"], "Pranav");
		assert_eq!(json["template_params"]["from_name"], "Ada");
		assert_eq!(json["template_params"]["from_email"], "ada@example.com");
		assert_eq!(json["template_params"]["message"], "Hello \"there\"");
	}

	#[test]
	fn rejection_message_names_status() {
		let err = RelayError::Rejected {
			status: 400,
			body: "The user ID is invalid".into(),
		};
		assert_eq!(
			err.to_string(),
			"relay rejected the message (HTTP 400): The user ID is invalid"
		);
	}
}
