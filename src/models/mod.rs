pub mod activities;
pub mod announcements;
pub mod teachers;

pub use activities::{ActivityDetails, ActivityRow, ScheduleDetails};
pub use announcements::AnnouncementRow;
pub use teachers::TeacherRow;
