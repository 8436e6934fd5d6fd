use super::Icon;

pub const NAME: &str = "Pranav Rathore";
pub const TAGLINE: &str =
	"Building secure, modern, and interactive digital experiences where security meets innovation";
pub const GITHUB_PROFILE: &str = "https://github.com/Pranavfr";
pub const RESUME_URL: &str = "/resume.pdf";
pub const COPYRIGHT: &str = "\u{a9} 2025 Pranav Rathore. All rights reserved.";

/// A role shown under the hero title; `short` replaces `full` on narrow screens.
#[derive(Clone, Copy, Debug)]
pub struct Role {
	pub full: &'static str,
	pub short: &'static str,
	pub icon: Icon,
	pub tone: &'static str,
}

pub const ROLES: &[Role] = &[
	Role {
		full: "Cybersecurity Analyst",
		short: "Security Analyst",
		icon: Icon::Shield,
		tone: "cyan",
	},
	Role {
		full: "Full-Stack Developer",
		short: "Developer",
		icon: Icon::Monitor,
		tone: "blue",
	},
	Role {
		full: "Discord Bot Creator",
		short: "Bot Creator",
		icon: Icon::Cpu,
		tone: "purple",
	},
];

#[derive(Clone, Copy, Debug)]
pub struct HeadlineStat {
	pub value: &'static str,
	pub label: &'static str,
	pub tone: &'static str,
}

pub const HEADLINE_STATS: &[HeadlineStat] = &[
	HeadlineStat { value: "15+", label: "Projects", tone: "cyan" },
	HeadlineStat { value: "2+", label: "Years Exp", tone: "blue" },
	HeadlineStat { value: "11", label: "GitHub Repos", tone: "purple" },
];

#[derive(Clone, Copy, Debug)]
pub struct Achievement {
	pub icon: Icon,
	pub label: &'static str,
	pub value: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
	Achievement { icon: Icon::Award, label: "Top Rated", value: "5\u{2605}" },
	Achievement { icon: Icon::Target, label: "Success Rate", value: "100%" },
	Achievement { icon: Icon::Zap, label: "Response Time", value: "<2hrs" },
	Achievement { icon: Icon::Shield, label: "Security Level", value: "Max" },
];

pub const ABOUT_HEADLINE: &str = "Transforming Ideas into Reality";
pub const ABOUT_PARAGRAPHS: &[&str] = &[
	"A passionate full-stack developer and cybersecurity enthusiast who thrives on solving complex problems through innovative code solutions.",
	"From secure web applications to intelligent Discord bots, I merge cutting-edge technology with creative problem-solving.",
];

/// A labelled percentage bar.
#[derive(Clone, Copy, Debug)]
pub struct Proficiency {
	pub name: &'static str,
	pub level: u8,
	pub tone: &'static str,
}

pub const CORE_EXPERTISE: &[Proficiency] = &[
	Proficiency { name: "Full-Stack Development", level: 95, tone: "cyan" },
	Proficiency { name: "Cybersecurity", level: 90, tone: "green" },
	Proficiency { name: "Bot Development", level: 88, tone: "purple" },
	Proficiency { name: "Problem Solving", level: 98, tone: "blue" },
];

#[derive(Clone, Copy, Debug)]
pub struct ExpertiseTag {
	pub label: &'static str,
	pub icon: Icon,
	pub gradient: (&'static str, &'static str),
	pub description: &'static str,
	pub specialty: &'static str,
}

pub const EXPERTISE_TAGS: &[ExpertiseTag] = &[
	ExpertiseTag {
		label: "Full-Stack Developer",
		icon: Icon::Monitor,
		gradient: ("cyan", "blue"),
		description: "Building end-to-end web applications with modern frameworks",
		specialty: "React, Node.js, Python",
	},
	ExpertiseTag {
		label: "Cybersecurity Expert",
		icon: Icon::Shield,
		gradient: ("green", "teal"),
		description: "Securing applications with industry best practices",
		specialty: "OWASP, Penetration Testing",
	},
	ExpertiseTag {
		label: "Discord Bot Creator",
		icon: Icon::Cpu,
		gradient: ("purple", "pink"),
		description: "Creating intelligent bots with AI integration",
		specialty: "Discord.js, AI Integration",
	},
	ExpertiseTag {
		label: "Innovation Leader",
		icon: Icon::Sparkles,
		gradient: ("orange", "red"),
		description: "Pioneering solutions with emerging technologies",
		specialty: "AI, Blockchain, IoT",
	},
];
