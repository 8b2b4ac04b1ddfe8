pub mod activities;
pub mod announcements;
