pub mod case;
pub mod portal;

pub use case::{CaseInput, CaseResult, FetchedPage, ParsedDocument};
pub use portal::{PortalTask, PortalTaskDetail};
