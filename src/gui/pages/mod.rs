//! Settings pages

mod responses;

pub use responses::{PageOutput, PageTree, ResponsesPage, DESCRIPTION, TITLE};
