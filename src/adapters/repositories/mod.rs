mod pg_comment_repository;
mod pg_poster_repository;
mod pg_profile_repository;
mod pg_rating_repository;

pub use pg_comment_repository::PgCommentRepository;
pub use pg_poster_repository::PgPosterRepository;
pub use pg_profile_repository::PgProfileRepository;
pub use pg_rating_repository::PgRatingRepository;
