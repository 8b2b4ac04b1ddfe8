use serde::Serialize;

/// Flat activity row. `days` holds a JSON array of day names; `participants`
/// is the newline-joined roster in signup order (see `activities_repo`).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub days: String,
    pub start_time: String,
    pub end_time: String,
    pub max_participants: i64,
    pub participants: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleDetails {
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}

/// Wire shape of a single activity; keyed by name in the listing response,
/// so the name itself is not repeated here.
#[derive(Debug, Serialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub schedule_details: ScheduleDetails,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

impl ActivityRow {
    pub fn into_details(self) -> (String, ActivityDetails) {
        let days: Vec<String> = serde_json::from_str(&self.days).unwrap_or_default();
        let participants = self
            .participants
            .as_deref()
            .unwrap_or("")
            .split('\n')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        (
            self.name,
            ActivityDetails {
                description: self.description,
                schedule: self.schedule,
                schedule_details: ScheduleDetails {
                    days,
                    start_time: self.start_time,
                    end_time: self.end_time,
                },
                max_participants: self.max_participants,
                participants,
            },
        )
    }
}
