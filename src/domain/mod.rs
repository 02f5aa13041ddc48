pub mod errors;
pub mod poem;
