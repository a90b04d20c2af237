use uuid::Uuid;

use crate::domain::models::rating::{Rating, RatingSummary};

/// Mean rating rounded to one decimal, the count, and the viewer's own rating.
pub fn summarize(ratings: &[Rating], viewer: Option<Uuid>) -> RatingSummary {
    let total_ratings = ratings.len();
    let average_rating = if total_ratings == 0 {
        0.0
    } else {
        let sum: i64 = ratings.iter().map(|r| i64::from(r.rating)).sum();
        round_to_tenth(sum as f64 / total_ratings as f64)
    };

    let user_rating = viewer.and_then(|user_id| {
        ratings
            .iter()
            .find(|r| r.user_id == user_id)
            .map(|r| r.rating)
    });

    RatingSummary {
        average_rating,
        total_ratings,
        user_rating,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
