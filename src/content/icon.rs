/// Icon references used by the content tables.
///
/// Rendered as a single glyph inside a `span.icon`; the stylesheet sizes and
/// tints it from the surrounding tone class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
	Code,
	Database,
	Shield,
	Cpu,
	Cloud,
	Globe,
	Zap,
	Sparkles,
	Monitor,
	Award,
	Target,
	Mail,
	Phone,
	Linkedin,
	Github,
	Clock,
	Message,
	MapPin,
	Star,
	Branch,
	Calendar,
}

impl Icon {
	pub fn glyph(self) -> &'static str {
		match self {
			Icon::Code => "</>",
			Icon::Database => "\u{26C1}",
			Icon::Shield => "\u{1F6E1}",
			Icon::Cpu => "\u{2699}",
			Icon::Cloud => "\u{2601}",
			Icon::Globe => "\u{1F310}",
			Icon::Zap => "\u{26A1}",
			Icon::Sparkles => "\u{2728}",
			Icon::Monitor => "\u{1F5B5}",
			Icon::Award => "\u{1F3C5}",
			Icon::Target => "\u{1F3AF}",
			Icon::Mail => "\u{2709}",
			Icon::Phone => "\u{260E}",
			Icon::Linkedin => "in",
			Icon::Github => "\u{2325}",
			Icon::Clock => "\u{23F1}",
			Icon::Message => "\u{1F4AC}",
			Icon::MapPin => "\u{1F4CD}",
			Icon::Star => "\u{2605}",
			Icon::Branch => "\u{2442}",
			Icon::Calendar => "\u{1F4C5}",
		}
	}
}
