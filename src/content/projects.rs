#[derive(Clone, Copy, Debug)]
pub struct Project {
	pub title: &'static str,
	pub description: &'static str,
	pub image: &'static str,
	pub live_link: &'static str,
	pub github_link: &'static str,
	pub tech_stack: &'static [&'static str],
	pub gradient: (&'static str, &'static str),
	pub category: &'static str,
	pub features: &'static [&'static str],
	/// Key/value pairs for the hover overlay, in display order.
	pub stats: &'static [(&'static str, &'static str)],
}

pub const PROJECTS: &[Project] = &[
	Project {
		title: "Esports Talks Website",
		description: "A comprehensive esports community platform for India's premier gaming community, featuring community management, content creation, brand partnerships, and tournament organization.",
		image: "/talkesp.png",
		live_link: "https://www.talkesports.in/",
		github_link: "https://github.com/Pranavfr/esports-talks",
		tech_stack: &["React", "Tailwind CSS", "JavaScript", "Node.js", "MongoDB"],
		gradient: ("forest", "teal"),
		category: "Community Platform",
		features: &["8K+ Members", "Content Creation", "Brand Partnerships", "Tournament Management"],
		stats: &[("users", "8K+"), ("engagement", "40K+"), ("events", "50+")],
	},
	Project {
		title: "Personality Test App",
		description: "Advanced quiz-based application that analyzes user personalities using MBTI logic with detailed insights and personalized recommendations.",
		image: "/personality.png",
		live_link: "https://personality-test-app.vercel.app/",
		github_link: "https://github.com/Pranavfr/PersonalityTest",
		tech_stack: &["React", "TypeScript", "Tailwind CSS", "Vite"],
		gradient: ("gold", "coral"),
		category: "Psychology App",
		features: &["MBTI Analysis", "Detailed Insights", "Personality Types", "Interactive Quiz"],
		stats: &[("users", "2K+"), ("accuracy", "95%"), ("types", "16")],
	},
	Project {
		title: "URL Shortener",
		description: "Military-grade URL shortener with advanced security features, analytics dashboard, and comprehensive link management system.",
		image: "/urlshortener.png",
		live_link: "https://url-shortener-pranav.vercel.app/",
		github_link: "https://github.com/Pranavfr/url-shortener",
		tech_stack: &["Python", "Flask", "MongoDB", "HTML/CSS", "JavaScript"],
		gradient: ("sage", "sage"),
		category: "Utility Tool",
		features: &["Security Features", "Analytics Dashboard", "Link Management", "QR Codes"],
		stats: &[("links", "1K+"), ("clicks", "50K+"), ("security", "100%")],
	},
	Project {
		title: "GlowHelp AI Chatbot",
		description: "AI-powered chatbot for personalized skincare guidance using advanced machine learning and natural language processing.",
		image: "/glowhelp.png",
		live_link: "https://glowhelpai-chatbot.vercel.app/",
		github_link: "https://github.com/Pranavfr/glowhelpai-chatbot",
		tech_stack: &["React", "OpenAI API", "JavaScript", "CSS3", "Vercel"],
		gradient: ("teal", "forest"),
		category: "AI Application",
		features: &["AI Chatbot", "Skincare Guidance", "Personalized Advice", "Natural Language"],
		stats: &[("users", "5K+"), ("accuracy", "90%"), ("languages", "5")],
	},
];
