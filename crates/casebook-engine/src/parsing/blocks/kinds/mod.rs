pub mod footer;
pub mod heading;
pub mod separator;
pub mod table;

pub use footer::CitationFooter;
pub use heading::Heading;
pub use separator::Separator;
pub use table::TableRow;
