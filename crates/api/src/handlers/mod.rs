pub mod activities;
pub mod dashboard;
pub mod installations;
pub mod session;
pub mod technicians;
pub mod tickets;
