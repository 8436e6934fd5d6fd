//! Build-time configuration.
//!
//! The relay identifiers are public values baked into the bundle. Each one can
//! be replaced at build time through the matching `PORTFOLIO_*` environment
//! variable (for example from the Trunk build environment).

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifiers for the hosted email relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
	pub endpoint: String,
	pub service_id: String,
	pub template_id: String,
	pub public_key: String,
	/// Name the relay template greets the message to.
	pub recipient: String,
}

impl Default for RelayConfig {
	fn default() -> Self {
		Self {
			endpoint: option_env!("PORTFOLIO_RELAY_ENDPOINT")
				.unwrap_or(EMAILJS_ENDPOINT)
				.to_string(),
			service_id: option_env!("PORTFOLIO_RELAY_SERVICE_ID")
				.unwrap_or("service_yhfw0n4")
				.to_string(),
			template_id: option_env!("PORTFOLIO_RELAY_TEMPLATE_ID")
				.unwrap_or("template_bvjhvrs")
				.to_string(),
			public_key: option_env!("PORTFOLIO_RELAY_PUBLIC_KEY")
				.unwrap_or("aCQirRTtXKeTwLmWd")
				.to_string(),
			recipient: option_env!("PORTFOLIO_RELAY_RECIPIENT")
				.unwrap_or("Pranav")
				.to_string(),
		}
	}
}
