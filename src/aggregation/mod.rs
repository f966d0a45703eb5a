pub mod charts;
pub mod grouping;

pub use charts::{
    genre_distribution, genre_frequency, genre_scores, popularity_vs_score, rating_distribution,
    studio_scores, top_genres, year_distribution, RatingBucket, RATING_BUCKETS,
};
pub use grouping::{group_in_order, GroupStats};
