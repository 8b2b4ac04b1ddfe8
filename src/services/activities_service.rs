use std::collections::BTreeMap;

use serde::Deserialize;
use sqlx::SqlitePool;

use crate::database::activities_repo;
use crate::error::AppError;
use crate::models::ActivityDetails;

#[derive(Debug, Deserialize, Default)]
pub struct ActivitiesQuery {
    pub day: Option<String>,
    pub start_time: Option<String>, // inclusive lower bound, "HH:MM"
    pub end_time: Option<String>,   // inclusive upper bound, "HH:MM"
}

// Clients routinely send `?day=` for "no filter".
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Lists activities keyed by name, optionally narrowed by day membership and
/// lexicographic time bounds.
pub async fn list_activities(
    pool: &SqlitePool,
    query: &ActivitiesQuery,
) -> Result<BTreeMap<String, ActivityDetails>, AppError> {
    let rows = activities_repo::list_activities(
        pool,
        present(&query.day),
        present(&query.start_time),
        present(&query.end_time),
    )
    .await?;

    Ok(rows.into_iter().map(|row| row.into_details()).collect())
}

/// Sorted distinct days across every activity's schedule.
pub async fn list_days(pool: &SqlitePool) -> Result<Vec<String>, AppError> {
    Ok(activities_repo::list_days(pool).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{
        activities_repo::{insert_activity, insert_participant, NewActivity},
        test_pool,
    };

    async fn seed_activity(
        pool: &SqlitePool,
        name: &str,
        days: &[&str],
        start_time: &str,
        end_time: &str,
    ) {
        let days_json = serde_json::to_string(days).unwrap();
        insert_activity(
            pool,
            NewActivity {
                name,
                description: "test activity",
                schedule: "whenever",
                days: &days_json,
                start_time,
                end_time,
                max_participants: 10,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn unfiltered_listing_returns_every_activity() {
        let pool = test_pool().await;
        seed_activity(&pool, "Chess Club", &["Monday", "Friday"], "15:15", "16:45").await;
        seed_activity(&pool, "Art Club", &["Thursday"], "15:15", "17:00").await;
        insert_participant(&pool, "Chess Club", "a@mergington.edu")
            .await
            .unwrap();

        let result = list_activities(&pool, &ActivitiesQuery::default())
            .await
            .unwrap();

        assert_eq!(
            result.keys().collect::<Vec<_>>(),
            vec!["Art Club", "Chess Club"]
        );
        let chess = &result["Chess Club"];
        assert_eq!(chess.schedule_details.days, vec!["Monday", "Friday"]);
        assert_eq!(chess.participants, vec!["a@mergington.edu"]);
        assert!(result["Art Club"].participants.is_empty());
    }

    #[tokio::test]
    async fn day_filter_returns_matching_subset() {
        let pool = test_pool().await;
        seed_activity(&pool, "Chess Club", &["Monday", "Friday"], "15:15", "16:45").await;
        seed_activity(&pool, "Art Club", &["Thursday"], "15:15", "17:00").await;

        let query = ActivitiesQuery {
            day: Some("Friday".to_string()),
            ..Default::default()
        };
        let result = list_activities(&pool, &query).await.unwrap();

        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["Chess Club"]);
    }

    #[tokio::test]
    async fn time_filters_apply_lexicographic_bounds() {
        let pool = test_pool().await;
        seed_activity(&pool, "Morning Fitness", &["Monday"], "06:30", "07:45").await;
        seed_activity(&pool, "Chess Club", &["Monday"], "15:15", "16:45").await;

        let after_noon = ActivitiesQuery {
            start_time: Some("12:00".to_string()),
            ..Default::default()
        };
        let result = list_activities(&pool, &after_noon).await.unwrap();
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["Chess Club"]);

        let done_by_eight = ActivitiesQuery {
            end_time: Some("08:00".to_string()),
            ..Default::default()
        };
        let result = list_activities(&pool, &done_by_eight).await.unwrap();
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["Morning Fitness"]);
    }

    #[tokio::test]
    async fn combined_filters_require_every_predicate() {
        let pool = test_pool().await;
        seed_activity(&pool, "Morning Fitness", &["Monday"], "06:30", "07:45").await;
        seed_activity(&pool, "Chess Club", &["Monday"], "15:15", "16:45").await;

        let query = ActivitiesQuery {
            day: Some("Monday".to_string()),
            start_time: Some("15:00".to_string()),
            end_time: Some("17:00".to_string()),
        };
        let result = list_activities(&pool, &query).await.unwrap();
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["Chess Club"]);
    }

    #[tokio::test]
    async fn empty_string_filters_are_ignored() {
        let pool = test_pool().await;
        seed_activity(&pool, "Chess Club", &["Monday"], "15:15", "16:45").await;

        let query = ActivitiesQuery {
            day: Some(String::new()),
            start_time: Some(String::new()),
            end_time: Some(String::new()),
        };
        let result = list_activities(&pool, &query).await.unwrap();
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn days_are_distinct_and_sorted() {
        let pool = test_pool().await;
        seed_activity(&pool, "Chess Club", &["Monday", "Friday"], "15:15", "16:45").await;
        seed_activity(&pool, "Debate Team", &["Monday"], "16:00", "17:30").await;

        let days = list_days(&pool).await.unwrap();
        assert_eq!(days, vec!["Friday", "Monday"]);
    }

    #[tokio::test]
    async fn no_activities_means_no_days() {
        let pool = test_pool().await;
        assert!(list_days(&pool).await.unwrap().is_empty());
    }
}
