//! Mock GitHub activity and the aggregates shown above it.

use chrono::DateTime;

/// Public repository count shown on the stats card. The mock table only
/// lists the most recent few.
pub const DECLARED_REPO_COUNT: u32 = 11;

#[derive(Clone, Copy, Debug)]
pub struct Repository {
	pub name: &'static str,
	pub description: &'static str,
	pub html_url: &'static str,
	pub stargazers_count: u32,
	pub forks_count: u32,
	pub language: &'static str,
	pub updated_at: &'static str,
	pub topics: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Commit {
	pub sha: &'static str,
	pub message: &'static str,
	pub date: &'static str,
	pub repo: &'static str,
}

pub const MOCK_REPOSITORIES: &[Repository] = &[
	Repository {
		name: "esports-talks",
		description: "Comprehensive esports community platform for India's premier gaming community",
		html_url: "https://github.com/Pranavfr/esports-talks",
		stargazers_count: 45,
		forks_count: 12,
		language: "JavaScript",
		updated_at: "2024-01-15T10:30:00Z",
		topics: &["react", "community", "esports", "gaming"],
	},
	Repository {
		name: "PersonalityTest",
		description: "Advanced quiz-based application that analyzes user personalities using MBTI logic",
		html_url: "https://github.com/Pranavfr/PersonalityTest",
		stargazers_count: 32,
		forks_count: 8,
		language: "TypeScript",
		updated_at: "2024-01-10T14:20:00Z",
		topics: &["react", "typescript", "personality", "quiz"],
	},
	Repository {
		name: "url-shortener",
		description: "Military-grade URL shortener with advanced security features and analytics",
		html_url: "https://github.com/Pranavfr/url-shortener",
		stargazers_count: 28,
		forks_count: 15,
		language: "Python",
		updated_at: "2024-01-08T09:15:00Z",
		topics: &["python", "flask", "security", "analytics"],
	},
	Repository {
		name: "glowhelpai-chatbot",
		description: "AI-powered chatbot for personalized skincare guidance using OpenAI API",
		html_url: "https://github.com/Pranavfr/glowhelpai-chatbot",
		stargazers_count: 38,
		forks_count: 6,
		language: "JavaScript",
		updated_at: "2024-01-12T16:45:00Z",
		topics: &["ai", "chatbot", "skincare", "openai"],
	},
	Repository {
		name: "portfolio-website",
		description: "Modern portfolio website built with React, TypeScript, and Tailwind CSS",
		html_url: "https://github.com/Pranavfr/portfolio-website",
		stargazers_count: 25,
		forks_count: 10,
		language: "TypeScript",
		updated_at: "2024-01-14T11:30:00Z",
		topics: &["react", "typescript", "portfolio", "tailwind"],
	},
];

pub const MOCK_COMMITS: &[Commit] = &[
	Commit {
		sha: "abc123",
		message: "feat: Add interactive skill tree component",
		date: "2024-01-15T10:30:00Z",
		repo: "portfolio-website",
	},
	Commit {
		sha: "def456",
		message: "fix: Resolve authentication issues in esports platform",
		date: "2024-01-14T16:20:00Z",
		repo: "esports-talks",
	},
	Commit {
		sha: "ghi789",
		message: "feat: Implement AI chatbot for skincare guidance",
		date: "2024-01-13T14:15:00Z",
		repo: "glowhelpai-chatbot",
	},
	Commit {
		sha: "jkl012",
		message: "docs: Update README with deployment instructions",
		date: "2024-01-12T09:45:00Z",
		repo: "url-shortener",
	},
	Commit {
		sha: "mno345",
		message: "feat: Add personality type analysis to quiz app",
		date: "2024-01-11T13:30:00Z",
		repo: "PersonalityTest",
	},
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivityStats {
	pub total_repos: u32,
	pub total_stars: u32,
	pub total_forks: u32,
	pub recent_commits: u32,
}

impl ActivityStats {
	pub fn compute(repos: &[Repository], commits: &[Commit]) -> Self {
		let (total_stars, total_forks) = repos.iter().fold((0, 0), |(stars, forks), repo| {
			(stars + repo.stargazers_count, forks + repo.forks_count)
		});
		Self {
			total_repos: DECLARED_REPO_COUNT,
			total_stars,
			total_forks,
			recent_commits: commits.len() as u32,
		}
	}
}

/// `2024-01-15T10:30:00Z` -> `Jan 15, 2024`. Unparsable input is shown as-is.
pub fn format_date(raw: &str) -> String {
	DateTime::parse_from_rfc3339(raw)
		.map(|date| date.format("%b %-d, %Y").to_string())
		.unwrap_or_else(|_| raw.to_string())
}

pub fn language_tone(language: &str) -> &'static str {
	match language {
		"JavaScript" => "yellow",
		"TypeScript" => "blue",
		"Python" => "green",
		"React" => "cyan",
		"HTML" => "orange",
		"CSS" => "purple",
		_ => "gray",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn totals_sum_the_mock_table() {
		let stats = ActivityStats::compute(MOCK_REPOSITORIES, MOCK_COMMITS);
		assert_eq!(stats.total_stars, 168);
		assert_eq!(stats.total_forks, 51);
		assert_eq!(stats.recent_commits, 5);
		assert_eq!(stats.total_repos, DECLARED_REPO_COUNT);
	}

	#[test]
	fn empty_tables_fold_to_zero() {
		let stats = ActivityStats::compute(&[], &[]);
		assert_eq!(stats.total_stars, 0);
		assert_eq!(stats.total_forks, 0);
		assert_eq!(stats.recent_commits, 0);
	}

	#[test]
	fn dates_render_short_month_form() {
		assert_eq!(format_date("2024-01-15T10:30:00Z"), "Jan 15, 2024");
		assert_eq!(format_date("2024-01-08T09:15:00Z"), "Jan 8, 2024");
		assert_eq!(format_date("yesterday"), "yesterday");
	}

	#[test]
	fn unknown_language_is_neutral() {
		assert_eq!(language_tone("TypeScript"), "blue");
		assert_eq!(language_tone("Haskell"), "gray");
	}
}
