use anyhow::Result;
use colored::Colorize;
use log::info;
use std::sync::Arc;

use crate::aggregation::top_genres;
use crate::provider::DataProvider;

/// Prints every dashboard aggregate to stdout
pub struct SummaryService {
    provider: Arc<dyn DataProvider>,
    top: usize,
}

impl SummaryService {
    pub fn new(provider: Arc<dyn DataProvider>, top: usize) -> Self {
        Self { provider, top }
    }

    pub async fn run(&self) -> Result<()> {
        info!("Loading dashboard aggregates");

        let lines = self.render().await?;
        for line in lines {
            println!("{}", line);
        }
        Ok(())
    }

    /// Lines of the report, without trailing newlines
    pub async fn render(&self) -> Result<Vec<String>> {
        let mut out = Vec::new();

        heading(&mut out, "Genre distribution");
        for row in self.provider.genre_distribution().await? {
            out.push(format!("  {:<16} {:>4} {:>6.1}%", row.genre, row.count, row.percentage));
        }

        heading(&mut out, &format!("Top {} genres", self.top));
        let frequency = self.provider.genre_frequency().await?;
        for row in top_genres(&frequency, self.top) {
            out.push(format!("  {:<16} {:>6}", row.genre, row.frequency));
        }

        heading(&mut out, "Average score by genre");
        for row in self.provider.genre_scores().await? {
            out.push(format!("  {:<16} {:>6.2}", row.genre, row.average_score));
        }

        heading(&mut out, "Average score by studio");
        for row in self.provider.studio_scores().await? {
            out.push(format!(
                "  {:<16} {:>6.2} ({} titles)",
                row.studio, row.average_score, row.count
            ));
        }

        heading(&mut out, "Rating distribution");
        for row in self.provider.rating_distribution().await? {
            out.push(format!("  {:<16} {:>4}", row.range, row.count));
        }

        heading(&mut out, "Titles per year");
        for row in self.provider.year_distribution().await? {
            out.push(format!("  {:<16} {:>4}", row.year, row.count));
        }

        heading(&mut out, "Popularity vs score");
        for row in self.provider.popularity_vs_score().await? {
            out.push(format!("  {:<34} {:>10} {:>5.1}", row.name, row.popularity, row.score));
        }

        Ok(out)
    }
}

fn heading(out: &mut Vec<String>, title: &str) {
    if !out.is_empty() {
        out.push(String::new());
    }
    out.push(title.bold().to_string());
}
