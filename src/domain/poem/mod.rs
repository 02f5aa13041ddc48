pub mod entity;
pub mod index;
pub mod repository;
pub mod slug;
pub mod specifications;
pub mod value_objects;

pub use entity::PoemRecord;
pub use index::SlugIndex;
pub use repository::{PoemPage, PoemReadRepository};
pub use slug::{SlugSource, normalize, unique_slug};
pub use value_objects::{PageRequest, PoemFilter, PoemId, PoemSlug};
