pub mod comment;
pub mod file;
pub mod party;
pub mod poster;
pub mod profile;
pub mod rating;
pub mod session;
