pub mod dashboard_layout;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod scroll_to_top;
pub mod sidebar;

pub use dashboard_layout::DashboardLayout;
pub use footer::Footer;
pub use navbar::Navbar;
pub use scroll_to_top::ScrollToTop;
