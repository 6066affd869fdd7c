pub mod alert;
pub mod footbase_title;
pub mod guarded;
pub mod layout;
pub mod match_row;
pub mod navbar;
pub mod notification_bell;
pub mod page;
pub mod sidebar;
pub mod user_menu;

pub use alert::{api_error, ApiErrorAlert, ErrorAlert, Loading, SuccessAlert};
pub use footbase_title::FootbaseTitleButton;
pub use guarded::Guarded;
pub use layout::AppLayout;
pub use match_row::MatchRow;
pub use navbar::Navbar;
pub use notification_bell::NotificationBell;
pub use page::Page;
pub use sidebar::Sidebar;
pub use user_menu::UserMenu;
