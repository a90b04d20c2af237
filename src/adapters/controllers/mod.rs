pub mod comment_controller;
pub mod health_controller;
pub mod media_controller;
pub mod poster_controller;
pub mod profile_controller;
pub mod rating_controller;
pub mod upload_controller;
