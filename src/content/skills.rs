use super::Icon;
use super::profile::Proficiency;

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
	pub title: &'static str,
	pub icon: Icon,
	pub gradient: (&'static str, &'static str),
	pub skills: &'static [Proficiency],
}

/// Short value card below the category grid.
#[derive(Clone, Copy, Debug)]
pub struct Highlight {
	pub icon: Icon,
	pub label: &'static str,
	pub value: &'static str,
}

const fn skill(name: &'static str, level: u8, tone: &'static str) -> Proficiency {
	Proficiency { name, level, tone }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
	SkillCategory {
		title: "Frontend Development",
		icon: Icon::Code,
		gradient: ("cyan", "blue"),
		skills: &[
			skill("React", 95, "cyan"),
			skill("TypeScript", 90, "blue"),
			skill("Tailwind CSS", 92, "cyan"),
			skill("Next.js", 88, "blue"),
			skill("HTML/CSS", 98, "cyan"),
		],
	},
	SkillCategory {
		title: "Backend Development",
		icon: Icon::Database,
		gradient: ("green", "teal"),
		skills: &[
			skill("Node.js", 90, "green"),
			skill("Python", 85, "teal"),
			skill("Flask", 88, "green"),
			skill("Express.js", 92, "teal"),
			skill("MongoDB", 87, "green"),
		],
	},
	SkillCategory {
		title: "Cybersecurity",
		icon: Icon::Shield,
		gradient: ("red", "pink"),
		skills: &[
			skill("Penetration Testing", 88, "red"),
			skill("OWASP", 92, "pink"),
			skill("Network Security", 85, "red"),
			skill("Cryptography", 80, "pink"),
			skill("Security Auditing", 90, "red"),
		],
	},
	SkillCategory {
		title: "AI & Machine Learning",
		icon: Icon::Cpu,
		gradient: ("purple", "indigo"),
		skills: &[
			skill("OpenAI API", 85, "purple"),
			skill("Discord.js", 92, "indigo"),
			skill("Natural Language Processing", 80, "purple"),
			skill("Chatbot Development", 88, "indigo"),
			skill("AI Integration", 85, "purple"),
		],
	},
	SkillCategory {
		title: "DevOps & Cloud",
		icon: Icon::Cloud,
		gradient: ("orange", "yellow"),
		skills: &[
			skill("Git", 95, "orange"),
			skill("Docker", 80, "yellow"),
			skill("Vercel", 90, "orange"),
			skill("Railway", 85, "yellow"),
			skill("CI/CD", 82, "orange"),
		],
	},
	SkillCategory {
		title: "Web Technologies",
		icon: Icon::Globe,
		gradient: ("emerald", "green"),
		skills: &[
			skill("REST APIs", 92, "emerald"),
			skill("GraphQL", 75, "green"),
			skill("WebSocket", 85, "emerald"),
			skill("JWT Authentication", 90, "green"),
			skill("OAuth", 88, "emerald"),
		],
	},
];

pub const HIGHLIGHTS: &[Highlight] = &[
	Highlight { icon: Icon::Zap, label: "Fast Development", value: "Agile" },
	Highlight { icon: Icon::Shield, label: "Security First", value: "OWASP" },
	Highlight { icon: Icon::Sparkles, label: "Clean Code", value: "Best Practices" },
	Highlight { icon: Icon::Globe, label: "Cross Platform", value: "Responsive" },
];
