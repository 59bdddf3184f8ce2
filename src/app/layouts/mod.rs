pub mod header;

pub use header::{Header, Subheader};
