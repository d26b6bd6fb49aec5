pub mod dashboard;
pub mod inventory;
pub mod login;
pub mod memories;
pub mod register;

pub use dashboard::DashboardPage;
pub use inventory::InventoryPage;
pub use login::LoginPage;
pub use memories::MemoriesPage;
pub use register::RegisterPage;
