/// Pipe-delimited table rows.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// A row made only of pipes, colons, dashes and whitespace (`|---|:--|`).
    ///
    /// Such rows are alignment artifacts and never rendered.
    pub fn is_separator_row(line: &str) -> bool {
        !line.is_empty()
            && line
                .chars()
                .all(|c| c == Self::PIPE || c == ':' || c == '-' || c.is_whitespace())
    }

    /// A data row: contains a pipe and is not a separator row.
    pub fn is_data_row(line: &str) -> bool {
        line.contains(Self::PIPE) && !Self::is_separator_row(line)
    }

    /// Splits a row on pipes and trims each cell.
    ///
    /// An empty first or last cell produced by a leading or trailing pipe is
    /// discarded; empty cells in between are kept.
    pub fn cells(line: &str) -> Vec<&str> {
        let parts: Vec<&str> = line.split(Self::PIPE).collect();
        let last = parts.len() - 1;
        parts
            .iter()
            .enumerate()
            .filter(|&(idx, cell)| {
                let edge = idx == 0 || idx == last;
                !(edge && cell.trim().is_empty())
            })
            .map(|(_, cell)| cell.trim())
            .collect()
    }
}
