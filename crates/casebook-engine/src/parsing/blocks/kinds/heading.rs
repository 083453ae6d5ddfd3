/// Heading markers: a run of `#` (or full-width `＃`) followed by whitespace.
///
/// Exactly two markers open a section, exactly three open an entity. Any
/// other run length is not a heading.
pub struct Heading;

impl Heading {
    pub const MARKERS: [char; 2] = ['#', '＃'];
    pub const SECTION_LEVEL: usize = 2;
    pub const ENTITY_LEVEL: usize = 3;

    /// Returns true if the line starts with a marker character at all.
    pub fn looks_like_heading(line: &str) -> bool {
        line.starts_with(Self::MARKERS)
    }

    /// Splits a heading line into (level, title).
    ///
    /// Returns `None` unless the marker run is followed by whitespace and a
    /// non-empty title.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let rest = line.trim_start_matches(Self::MARKERS);
        let run = &line[..line.len() - rest.len()];
        if run.is_empty() || !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let title = rest.trim();
        if title.is_empty() {
            return None;
        }
        Some((run.chars().count(), title))
    }
}
