use log::debug;
use std::cmp::Ordering;

use super::grouping::{group_in_order, GroupStats};
use crate::domain::{
    AnimeRecord, GenreCount, GenreFrequency, GenreScore, PopularityPoint, RatingBucketCount,
    StudioScore, YearCount,
};

/// A rating range; `min` inclusive, `max` exclusive (open when None)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBucket {
    pub label: &'static str,
    pub min: f64,
    pub max: Option<f64>,
}

impl RatingBucket {
    fn contains(&self, rating: f64) -> bool {
        rating >= self.min && self.max.is_none_or(|max| rating < max)
    }
}

pub const RATING_BUCKETS: &[RatingBucket] = &[
    RatingBucket { label: "<8.0", min: f64::NEG_INFINITY, max: Some(8.0) },
    RatingBucket { label: "8.0-8.4", min: 8.0, max: Some(8.5) },
    RatingBucket { label: "8.5-8.8", min: 8.5, max: Some(8.9) },
    RatingBucket { label: "8.9-9.0", min: 8.9, max: Some(9.1) },
    RatingBucket { label: "9.1+", min: 9.1, max: None },
];

fn genre_groups(records: &[AnimeRecord]) -> Vec<(String, GroupStats)> {
    let pairs = records.iter().flat_map(|record| {
        dedup_genres(&record.genres)
            .into_iter()
            .map(move |genre| (genre.to_string(), record.source_rating))
    });
    group_in_order(pairs)
}

// A record lists a genre at most once as far as counting goes
fn dedup_genres(genres: &[String]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::with_capacity(genres.len());
    for genre in genres {
        if !seen.contains(&genre.as_str()) {
            seen.push(genre);
        }
    }
    seen
}

fn by_count_desc(a: &GroupStats, b: &GroupStats) -> Ordering {
    b.count.cmp(&a.count)
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// (genre, count, percentage of records), most common first
pub fn genre_distribution(records: &[AnimeRecord]) -> Vec<GenreCount> {
    let total = records.len();
    let mut groups = genre_groups(records);
    // stable sort keeps first-seen order among ties
    groups.sort_by(|a, b| by_count_desc(&a.1, &b.1));

    groups
        .into_iter()
        .map(|(genre, stats)| GenreCount {
            genre,
            count: stats.count,
            percentage: percentage(stats.count, total),
        })
        .collect()
}

fn percentage(count: u32, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// (genre, frequency), most frequent first
pub fn genre_frequency(records: &[AnimeRecord]) -> Vec<GenreFrequency> {
    genre_distribution(records)
        .into_iter()
        .map(|row| GenreFrequency {
            genre: row.genre,
            frequency: row.count,
        })
        .collect()
}

/// First `n` rows of an already sorted frequency list
pub fn top_genres(rows: &[GenreFrequency], n: usize) -> Vec<GenreFrequency> {
    rows.iter().take(n).cloned().collect()
}

/// Mean source rating per genre, best first
pub fn genre_scores(records: &[AnimeRecord]) -> Vec<GenreScore> {
    let mut rows: Vec<GenreScore> = genre_groups(records)
        .into_iter()
        .filter_map(|(genre, stats)| {
            stats.mean().map(|average_score| GenreScore { genre, average_score })
        })
        .collect();
    rows.sort_by(|a, b| by_score_desc(a.average_score, b.average_score));
    rows
}

/// Mean source rating and title count per studio, best first
pub fn studio_scores(records: &[AnimeRecord]) -> Vec<StudioScore> {
    let groups = group_in_order(
        records
            .iter()
            .map(|r| (r.studio.clone(), r.source_rating)),
    );

    let mut rows: Vec<StudioScore> = groups
        .into_iter()
        .filter_map(|(studio, stats)| {
            stats.mean().map(|average_score| StudioScore {
                studio,
                average_score,
                count: stats.count,
            })
        })
        .collect();
    rows.sort_by(|a, b| by_score_desc(a.average_score, b.average_score));
    rows
}

/// Titles per release year, oldest first
pub fn year_distribution(records: &[AnimeRecord]) -> Vec<YearCount> {
    let mut rows: Vec<YearCount> = group_in_order(records.iter().map(|r| (r.release_year, 0.0)))
        .into_iter()
        .map(|(year, stats)| YearCount {
            year,
            count: stats.count,
        })
        .collect();
    rows.sort_by_key(|row| row.year);
    rows
}

/// One point per record, in dataset order
pub fn popularity_vs_score(records: &[AnimeRecord]) -> Vec<PopularityPoint> {
    records
        .iter()
        .map(|r| PopularityPoint {
            name: r.title.clone(),
            popularity: r.popularity,
            score: r.source_rating,
        })
        .collect()
}

/// Counts per fixed rating bucket, empty buckets included
pub fn rating_distribution(records: &[AnimeRecord]) -> Vec<RatingBucketCount> {
    RATING_BUCKETS
        .iter()
        .map(|bucket| {
            let count = records
                .iter()
                .filter(|r| bucket.contains(r.source_rating))
                .count() as u32;
            debug!("Rating bucket {}: {} titles", bucket.label, count);
            RatingBucketCount {
                range: bucket.label.to_string(),
                count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_records;

    fn record(title: &str, year: i32, genres: &[&str], studio: &str, rating: f64) -> AnimeRecord {
        AnimeRecord {
            title: title.to_string(),
            release_year: year,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            studio: studio.to_string(),
            source_rating: rating,
            popularity: 1000,
            episode_count: None,
            media_type: None,
            source: None,
            episode_duration_minutes: None,
        }
    }

    #[test]
    fn test_genre_counts_match_records_containing_genre() {
        let records = seed_records();
        let rows = genre_distribution(&records);

        let total: u32 = rows.iter().map(|r| r.count).sum();
        assert!(total as usize >= records.len());

        for row in &rows {
            let expected = records.iter().filter(|r| r.has_genre(&row.genre)).count();
            assert_eq!(row.count as usize, expected, "genre {}", row.genre);
        }
    }

    #[test]
    fn test_genre_distribution_sorted_with_first_seen_ties() {
        let records = vec![
            record("A", 2000, &["Drama", "Comedy"], "S", 8.0),
            record("B", 2001, &["Comedy", "Action"], "S", 8.0),
            record("C", 2002, &["Action"], "S", 8.0),
        ];
        let rows = genre_distribution(&records);
        let genres: Vec<&str> = rows.iter().map(|r| r.genre.as_str()).collect();

        assert_eq!(genres, vec!["Comedy", "Action", "Drama"]);
        assert_eq!(rows[0].count, 2);
        assert!((rows[2].percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_seed_action_is_most_common_genre() {
        let rows = genre_distribution(&seed_records());

        assert_eq!(rows[0].genre, "Action");
        assert_eq!(rows[0].count, 9);
        assert_eq!(rows[0].percentage, 90.0);
    }

    #[test]
    fn test_duplicate_genre_in_one_record_counts_once() {
        let records = vec![record("A", 2000, &["Drama", "Drama"], "S", 8.0)];
        let rows = genre_distribution(&records);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 1);
    }

    #[test]
    fn test_genre_scores_are_means_without_nan() {
        let records = vec![
            record("A", 2000, &["Drama"], "S", 8.0),
            record("B", 2001, &["Drama", "Comedy"], "S", 9.0),
        ];
        let rows = genre_scores(&records);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], GenreScore { genre: "Comedy".to_string(), average_score: 9.0 });
        assert_eq!(rows[1], GenreScore { genre: "Drama".to_string(), average_score: 8.5 });
        assert!(rows.iter().all(|r| r.average_score.is_finite()));
    }

    #[test]
    fn test_empty_dataset_yields_empty_aggregates() {
        let records: Vec<AnimeRecord> = Vec::new();

        assert!(genre_distribution(&records).is_empty());
        assert!(genre_scores(&records).is_empty());
        assert!(studio_scores(&records).is_empty());
        assert!(year_distribution(&records).is_empty());
        assert!(rating_distribution(&records).iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_studio_scores_include_counts() {
        let rows = studio_scores(&seed_records());
        let madhouse = rows.iter().find(|r| r.studio == "Madhouse").unwrap();

        assert_eq!(madhouse.count, 3);
        assert!((madhouse.average_score - (9.0 + 8.8 + 9.0) / 3.0).abs() < 1e-9);
        assert!(rows.windows(2).all(|w| w[0].average_score >= w[1].average_score));
    }

    #[test]
    fn test_seed_years_are_distinct_and_ascending() {
        let rows = year_distribution(&seed_records());

        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|r| r.count == 1));
        assert!(rows.windows(2).all(|w| w[0].year < w[1].year));
        assert_eq!(rows[0].year, 1989);
    }

    #[test]
    fn test_year_distribution_groups_same_year() {
        let records = vec![
            record("A", 2010, &["Drama"], "S", 8.0),
            record("B", 2005, &["Drama"], "S", 8.0),
            record("C", 2010, &["Drama"], "S", 8.0),
        ];
        let rows = year_distribution(&records);

        assert_eq!(rows, vec![YearCount { year: 2005, count: 1 }, YearCount { year: 2010, count: 2 }]);
    }

    #[test]
    fn test_popularity_points_follow_dataset_order() {
        let records = seed_records();
        let points = popularity_vs_score(&records);

        assert_eq!(points.len(), records.len());
        assert_eq!(points[0].name, "Attack on Titan");
        assert_eq!(points[0].popularity, 2_500_000);
    }

    #[test]
    fn test_seed_rating_buckets() {
        let rows = rating_distribution(&seed_records());
        let counts: Vec<(&str, u32)> = rows.iter().map(|r| (r.range.as_str(), r.count)).collect();

        assert_eq!(
            counts,
            vec![("<8.0", 0), ("8.0-8.4", 1), ("8.5-8.8", 4), ("8.9-9.0", 4), ("9.1+", 1)]
        );
    }

    #[test]
    fn test_top_genres_truncates() {
        let rows = genre_frequency(&seed_records());
        let top = top_genres(&rows, 3);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].genre, "Action");
        assert!(top_genres(&rows, 100).len() == rows.len());
    }
}
