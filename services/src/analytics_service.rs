//! Platform-wide review score aggregates.

use db::models::review;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde::Serialize;

/// Averages of the three score dimensions plus the total review count.
///
/// Each average is taken over the reviews that carry that score; a
/// dimension with no scored reviews reports `0.0`. The count covers every
/// review row, scored or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub grammar_avg: f64,
    pub clarity_avg: f64,
    pub argument_avg: f64,
    pub reviews_count: i64,
}

pub async fn summary(db: &DatabaseConnection) -> Result<ReviewSummary, DbErr> {
    let reviews = review::Entity::find().all(db).await?;

    Ok(ReviewSummary {
        grammar_avg: mean(reviews.iter().filter_map(|r| r.grammar_score)),
        clarity_avg: mean(reviews.iter().filter_map(|r| r.clarity_score)),
        argument_avg: mean(reviews.iter().filter_map(|r| r.argument_score)),
        reviews_count: reviews.len() as i64,
    })
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0_f64, 0_u32), |(sum, n), v| (sum + v, n + 1));
    if n == 0 { 0.0 } else { sum / f64::from(n) }
}
