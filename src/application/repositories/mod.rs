pub mod comment_repository;
pub mod poster_repository;
pub mod profile_repository;
pub mod rating_repository;
