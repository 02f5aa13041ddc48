pub mod poems;
