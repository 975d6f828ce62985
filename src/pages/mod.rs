//! Pages
//!
//! One component per navigation target, plus the login screen.

mod archive;
mod contributors;
mod dashboard;
mod friends;
mod login;
mod stories;
mod weekly_edition;

pub use archive::ArchivePage;
pub use contributors::ContributorsPage;
pub use dashboard::DashboardPage;
pub use friends::FriendsPage;
pub use login::LoginPage;
pub use stories::StoriesPage;
pub use weekly_edition::WeeklyEditionPage;
