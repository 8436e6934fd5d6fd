use leptos::prelude::*;

use super::gradient_style;
use crate::components::contact_form::MessageForm;
use crate::components::reveal::{Reveal, Transition};
use crate::content::contact::{AVAILABILITY_NOTE, CONTACT_CHANNELS, OPEN_TO, QUICK_STATS};

/// Stagger slots for the two-column block, top to bottom.
const FORM_SLOT: usize = 0;
const NOTE_SLOT: usize = 1;

fn channel_slot(index: usize) -> usize {
	NOTE_SLOT + 1 + index
}

fn open_to_slot() -> usize {
	channel_slot(CONTACT_CHANNELS.len())
}

#[component]
pub fn Contact() -> impl IntoView {
	let card = Transition::CARD;

	let quick_stats = QUICK_STATS
		.iter()
		.enumerate()
		.map(|(i, stat)| {
			view! {
				<div class=format!("card stat-card tone-{} reveal-item", stat.tone) style=card.style(i)>
					<span class="icon">{stat.icon.glyph()}</span>
					<div class="stat-card-value">{stat.value}</div>
					<div class="stat-card-label">{stat.label}</div>
				</div>
			}
		})
		.collect_view();

	let channels = CONTACT_CHANNELS
		.iter()
		.enumerate()
		.map(|(i, channel)| {
			let external = channel.is_external();
			view! {
				<a
					class="card channel-card reveal-item"
					style=card.style(channel_slot(i))
					href=channel.href
					target=external.then_some("_blank")
					rel=external.then_some("noopener noreferrer")
				>
					<div class="channel-icon gradient" style=gradient_style(channel.gradient)>
						<span class="icon">{channel.icon.glyph()}</span>
					</div>
					<div>
						<h4>{channel.label}</h4>
						<p class="channel-value">{channel.value}</p>
						<p class="channel-description">{channel.description}</p>
					</div>
				</a>
			}
		})
		.collect_view();

	let open_to = OPEN_TO.iter().map(|item| view! { <li>{*item}</li> }).collect_view();

	view! {
		<Reveal id="contact" class="section" amount=0.1>
			<div class="container">
				<header class="section-header reveal-item" style=Transition::ITEM.style(0)>
					<h2 class="gradient-text">"Get In Touch"</h2>
					<p>"Ready to bring your ideas to life? Let's discuss your next project"</p>
				</header>
				<div class="grid grid-4">{quick_stats}</div>
				<div class="grid grid-2">
					<div class="card reveal-item" style=card.style(FORM_SLOT)>
						<h3>"Send a Message"</h3>
						<MessageForm />
					</div>
					<div class="contact-aside">
						<div class="card reveal-item" style=card.style(NOTE_SLOT)>
							<h3>"Let's Work Together"</h3>
							<p>{AVAILABILITY_NOTE}</p>
						</div>
						{channels}
						<div class="card reveal-item" style=card.style(open_to_slot())>
							<h4>"Open To"</h4>
							<ul class="check-list">{open_to}</ul>
						</div>
					</div>
				</div>
			</div>
		</Reveal>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn contact_cards_reveal_one_after_another() {
		let slots: Vec<usize> = [FORM_SLOT, NOTE_SLOT]
			.into_iter()
			.chain((0..CONTACT_CHANNELS.len()).map(channel_slot))
			.chain([open_to_slot()])
			.collect();

		assert!(slots.windows(2).all(|pair| pair[0] < pair[1]), "{slots:?}");
	}
}
