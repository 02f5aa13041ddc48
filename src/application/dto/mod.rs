pub mod pagination;
pub mod poems;

pub use pagination::GalleryPage;
pub use poems::{PoemDto, PoemSummaryDto};
