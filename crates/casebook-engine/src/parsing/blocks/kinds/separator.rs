/// Filler separator lines: three or more `-` and nothing else.
pub struct Separator;

impl Separator {
    pub const DASH: char = '-';
    pub const MIN_RUN: usize = 3;

    pub fn is_match(line: &str) -> bool {
        line.chars().count() >= Self::MIN_RUN && line.chars().all(|c| c == Self::DASH)
    }
}
