use super::models::{AnimeRecord, MediaType};

/// Hand-authored dataset used when no external source is configured
struct SeedEntry {
    title: &'static str,
    genres: &'static [&'static str],
    media_type: MediaType,
    episodes: u32,
    rating: f64,
    members: u64,
    year: i32,
    studio: &'static str,
    source: &'static str,
    duration: u32,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        title: "Attack on Titan",
        genres: &["Action", "Drama", "Fantasy"],
        media_type: MediaType::Tv,
        episodes: 25,
        rating: 9.0,
        members: 2_500_000,
        year: 2013,
        studio: "Mappa",
        source: "Manga",
        duration: 24,
    },
    SeedEntry {
        title: "Death Note",
        genres: &["Supernatural", "Thriller", "Psychological"],
        media_type: MediaType::Tv,
        episodes: 37,
        rating: 9.0,
        members: 2_200_000,
        year: 2006,
        studio: "Madhouse",
        source: "Manga",
        duration: 23,
    },
    SeedEntry {
        title: "One Piece",
        genres: &["Action", "Adventure", "Comedy"],
        media_type: MediaType::Tv,
        episodes: 1000,
        rating: 8.9,
        members: 1_800_000,
        year: 1999,
        studio: "Toei Animation",
        source: "Manga",
        duration: 24,
    },
    SeedEntry {
        title: "Naruto",
        genres: &["Action", "Adventure", "Martial Arts"],
        media_type: MediaType::Tv,
        episodes: 220,
        rating: 8.4,
        members: 1_600_000,
        year: 2002,
        studio: "Pierrot",
        source: "Manga",
        duration: 23,
    },
    SeedEntry {
        title: "Dragon Ball Z",
        genres: &["Action", "Adventure", "Martial Arts"],
        media_type: MediaType::Tv,
        episodes: 291,
        rating: 8.8,
        members: 1_500_000,
        year: 1989,
        studio: "Toei Animation",
        source: "Manga",
        duration: 24,
    },
    SeedEntry {
        title: "My Hero Academia",
        genres: &["Action", "School", "Super Power"],
        media_type: MediaType::Tv,
        episodes: 138,
        rating: 8.6,
        members: 1_400_000,
        year: 2016,
        studio: "Bones",
        source: "Manga",
        duration: 24,
    },
    SeedEntry {
        title: "Demon Slayer",
        genres: &["Action", "Historical", "Supernatural"],
        media_type: MediaType::Tv,
        episodes: 44,
        rating: 8.7,
        members: 1_300_000,
        year: 2019,
        studio: "Ufotable",
        source: "Manga",
        duration: 23,
    },
    SeedEntry {
        title: "One Punch Man",
        genres: &["Action", "Comedy", "Superhero"],
        media_type: MediaType::Tv,
        episodes: 24,
        rating: 8.8,
        members: 1_200_000,
        year: 2015,
        studio: "Madhouse",
        source: "Manga",
        duration: 24,
    },
    SeedEntry {
        title: "Fullmetal Alchemist: Brotherhood",
        genres: &["Action", "Adventure", "Dark Fantasy"],
        media_type: MediaType::Tv,
        episodes: 64,
        rating: 9.1,
        members: 2_000_000,
        year: 2009,
        studio: "Bones",
        source: "Manga",
        duration: 24,
    },
    SeedEntry {
        title: "Hunter x Hunter",
        genres: &["Action", "Adventure", "Fantasy"],
        media_type: MediaType::Tv,
        episodes: 148,
        rating: 9.0,
        members: 1_700_000,
        year: 2011,
        studio: "Madhouse",
        source: "Manga",
        duration: 23,
    },
];

/// Genre labels offered to the predictor
pub const AVAILABLE_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Fantasy",
    "Romance",
    "Sci-Fi",
    "Slice of Life",
    "Supernatural",
    "Thriller",
    "Horror",
    "Mystery",
    "Sports",
    "Music",
    "School",
    "Military",
    "Historical",
];

pub fn seed_records() -> Vec<AnimeRecord> {
    SEED.iter().map(to_record).collect()
}

pub fn available_genres() -> Vec<String> {
    AVAILABLE_GENRES.iter().map(|g| g.to_string()).collect()
}

fn to_record(entry: &SeedEntry) -> AnimeRecord {
    AnimeRecord {
        title: entry.title.to_string(),
        release_year: entry.year,
        genres: entry.genres.iter().map(|g| g.to_string()).collect(),
        studio: entry.studio.to_string(),
        source_rating: entry.rating,
        popularity: entry.members,
        episode_count: Some(entry.episodes),
        media_type: Some(entry.media_type),
        source: Some(entry.source.to_string()),
        episode_duration_minutes: Some(entry.duration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_ten_valid_records() {
        let records = seed_records();

        assert_eq!(records.len(), 10);
        assert!(records.iter().all(|r| !r.genres.is_empty()));
        assert!(records.iter().all(|r| (1.0..=10.0).contains(&r.source_rating)));
    }
}
