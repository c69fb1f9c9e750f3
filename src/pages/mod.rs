//! Pages
//!
//! One component per route.

mod admin_page;
mod dashboard_page;
mod dealer_page;
mod login_page;
mod main_page;
mod order_create_page;
mod order_detail_page;
mod products_page;
mod profile_page;
mod register_page;

pub use admin_page::AdminPage;
pub use dashboard_page::DashboardPage;
pub use dealer_page::DealerPage;
pub use login_page::LoginPage;
pub use main_page::MainPage;
pub use order_create_page::OrderCreatePage;
pub use order_detail_page::OrderDetailPage;
pub use products_page::ProductsPage;
pub use profile_page::ProfilePage;
pub use register_page::RegisterPage;
