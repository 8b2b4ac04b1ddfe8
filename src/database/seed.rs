use sqlx::SqlitePool;
use tracing::info;

use super::{activities_repo, activities_repo::NewActivity, teachers_repo};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    days: &'static [&'static str],
    start_time: &'static str,
    end_time: &'static str,
    max_participants: i64,
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Mondays and Fridays, 3:15 PM - 4:45 PM",
        days: &["Monday", "Friday"],
        start_time: "15:15",
        end_time: "16:45",
        max_participants: 12,
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 7:00 AM - 8:00 AM",
        days: &["Tuesday", "Thursday"],
        start_time: "07:00",
        end_time: "08:00",
        max_participants: 20,
    },
    SeedActivity {
        name: "Morning Fitness",
        description: "Early morning physical training",
        schedule: "Mondays, Wednesdays, Fridays, 6:30 AM - 7:45 AM",
        days: &["Monday", "Wednesday", "Friday"],
        start_time: "06:30",
        end_time: "07:45",
        max_participants: 30,
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore various art techniques and create masterpieces",
        schedule: "Thursdays, 3:15 PM - 5:00 PM",
        days: &["Thursday"],
        start_time: "15:15",
        end_time: "17:00",
        max_participants: 15,
    },
];

const SEED_TEACHERS: &[(&str, &str, &str)] = &[
    ("mrodriguez", "Ms. Rodriguez", "teacher"),
    ("mchen", "Mr. Chen", "teacher"),
    ("principal", "Principal Martinez", "admin"),
];

/// Populates a fresh database with the starter roster so GET endpoints have
/// something to serve. No-op once any activity exists.
pub async fn seed_if_empty(pool: &SqlitePool) -> sqlx::Result<()> {
    if activities_repo::count_activities(pool).await? > 0 {
        return Ok(());
    }

    info!("empty database, seeding starter activities and teachers");

    for a in SEED_ACTIVITIES {
        let days = serde_json::to_string(a.days).unwrap_or_else(|_| "[]".to_string());
        activities_repo::insert_activity(
            pool,
            NewActivity {
                name: a.name,
                description: a.description,
                schedule: a.schedule,
                days: &days,
                start_time: a.start_time,
                end_time: a.end_time,
                max_participants: a.max_participants,
            },
        )
        .await?;
    }

    for (username, display_name, role) in SEED_TEACHERS {
        teachers_repo::insert_teacher(pool, username, display_name, role).await?;
    }

    Ok(())
}
