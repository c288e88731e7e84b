pub mod activity_repo;
pub mod installation_repo;
pub mod preference_repo;
pub mod technician_repo;
pub mod ticket_repo;

pub use activity_repo::ActivityRepo;
pub use installation_repo::InstallationRepo;
pub use preference_repo::PreferenceRepo;
pub use technician_repo::TechnicianRepo;
pub use ticket_repo::TicketRepo;
