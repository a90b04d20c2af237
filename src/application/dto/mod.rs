pub mod poster_dto;
pub mod profile_dto;
