pub mod comment_dto;
pub mod poster_dto;
pub mod profile_dto;
pub mod rating_dto;
pub mod upload_dto;
