use super::Icon;
use crate::components::skill_graph::{
	Connection, LegendEntry, Position, SkillGraphData, SkillNode,
};

pub const SKILL_NODES: &[SkillNode] = &[
	SkillNode {
		id: "react",
		name: "React",
		level: 95,
		category: "Frontend",
		icon: Icon::Code,
		color: "cyan",
		description: "Advanced React with hooks, context, and performance optimization",
		position: Position { x: 50.0, y: 20.0 },
	},
	SkillNode {
		id: "typescript",
		name: "TypeScript",
		level: 90,
		category: "Frontend",
		icon: Icon::Code,
		color: "blue",
		description: "Strong typing and advanced TypeScript patterns",
		position: Position { x: 80.0, y: 40.0 },
	},
	SkillNode {
		id: "nodejs",
		name: "Node.js",
		level: 88,
		category: "Backend",
		icon: Icon::Database,
		color: "green",
		description: "Server-side JavaScript with Express and middleware",
		position: Position { x: 20.0, y: 60.0 },
	},
	SkillNode {
		id: "python",
		name: "Python",
		level: 85,
		category: "Backend",
		icon: Icon::Database,
		color: "teal",
		description: "Flask, Django, and data processing",
		position: Position { x: 50.0, y: 80.0 },
	},
	SkillNode {
		id: "security",
		name: "Cybersecurity",
		level: 92,
		category: "Security",
		icon: Icon::Shield,
		color: "red",
		description: "Penetration testing, OWASP, and security auditing",
		position: Position { x: 80.0, y: 60.0 },
	},
	SkillNode {
		id: "ai",
		name: "AI/ML",
		level: 85,
		category: "AI",
		icon: Icon::Cpu,
		color: "purple",
		description: "OpenAI API, chatbots, and natural language processing",
		position: Position { x: 20.0, y: 40.0 },
	},
	SkillNode {
		id: "devops",
		name: "DevOps",
		level: 82,
		category: "Infrastructure",
		icon: Icon::Cloud,
		color: "orange",
		description: "Docker, CI/CD, and cloud deployment",
		position: Position { x: 50.0, y: 60.0 },
	},
	SkillNode {
		id: "api",
		name: "REST APIs",
		level: 90,
		category: "Web",
		icon: Icon::Globe,
		color: "emerald",
		description: "API design, authentication, and documentation",
		position: Position { x: 80.0, y: 80.0 },
	},
];

pub const SKILL_CONNECTIONS: &[Connection] = &[
	Connection { from: "react", to: "typescript" },
	Connection { from: "react", to: "nodejs" },
	Connection { from: "nodejs", to: "python" },
	Connection { from: "python", to: "ai" },
	Connection { from: "ai", to: "security" },
	Connection { from: "security", to: "devops" },
	Connection { from: "devops", to: "api" },
	Connection { from: "api", to: "react" },
];

pub const SKILL_LEGEND: &[LegendEntry] = &[
	LegendEntry { category: "Frontend", color: "cyan", icon: Icon::Code },
	LegendEntry { category: "Backend", color: "green", icon: Icon::Database },
	LegendEntry { category: "Security", color: "red", icon: Icon::Shield },
	LegendEntry { category: "AI/ML", color: "purple", icon: Icon::Cpu },
];

pub const SKILL_GRAPH: SkillGraphData = SkillGraphData {
	nodes: SKILL_NODES,
	connections: SKILL_CONNECTIONS,
};
