mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetPoemBySlugQuery;
pub use list::ListPoemsQuery;
pub use service::PoemQueryService;
