use super::Icon;

#[derive(Clone, Copy, Debug)]
pub struct ContactChannel {
	pub icon: Icon,
	pub label: &'static str,
	pub value: &'static str,
	pub href: &'static str,
	pub gradient: (&'static str, &'static str),
	pub description: &'static str,
}

impl ContactChannel {
	/// `http(s)` links leave the page; `mailto:`/`tel:` hand off to the OS.
	pub fn is_external(&self) -> bool {
		self.href.starts_with("http")
	}
}

#[derive(Clone, Copy, Debug)]
pub struct QuickStat {
	pub icon: Icon,
	pub label: &'static str,
	pub value: &'static str,
	pub tone: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
	ContactChannel {
		icon: Icon::Mail,
		label: "Email",
		value: "pranav16022016@gmail.com",
		href: "mailto:pranav16022016@gmail.com",
		gradient: ("cyan", "blue"),
		description: "Drop me a line anytime",
	},
	ContactChannel {
		icon: Icon::Phone,
		label: "Phone",
		value: "+91 8521667782",
		href: "tel:+918521667782",
		gradient: ("green", "teal"),
		description: "Available for urgent projects",
	},
	ContactChannel {
		icon: Icon::Linkedin,
		label: "LinkedIn",
		value: "pranav-rathore-46aa56288",
		href: "https://linkedin.com/in/pranav-rathore-46aa56288",
		gradient: ("blue", "indigo"),
		description: "Let's connect professionally",
	},
	ContactChannel {
		icon: Icon::Github,
		label: "GitHub",
		value: "Pranavfr",
		href: "https://github.com/Pranavfr",
		gradient: ("gray", "gray"),
		description: "Check out my code repositories",
	},
];

pub const QUICK_STATS: &[QuickStat] = &[
	QuickStat { icon: Icon::Clock, label: "Response Time", value: "<2 Hours", tone: "cyan" },
	QuickStat { icon: Icon::Award, label: "Client Rating", value: "5\u{2605}", tone: "yellow" },
	QuickStat { icon: Icon::Message, label: "Projects Delivered", value: "15+", tone: "green" },
	QuickStat { icon: Icon::MapPin, label: "Availability", value: "Remote", tone: "purple" },
];

pub const AVAILABILITY_NOTE: &str =
	"Available for full-time positions, freelance projects, and consulting opportunities.";

pub const OPEN_TO: &[&str] = &[
	"Full-time positions",
	"Freelance projects",
	"Consulting opportunities",
	"Open source collaboration",
];
