pub mod add_edit_item_modal;
pub mod add_memory_modal;
pub mod category_select;
pub mod dashboard;
pub mod delete_confirm_modal;
pub mod event_modal;
pub mod navbar;
pub mod require_auth;
pub mod spinner;
pub mod stat_card;
pub mod stock_item_card;
pub mod stock_list;

pub use add_edit_item_modal::AddEditItemModal;
pub use add_memory_modal::AddMemoryModal;
pub use category_select::CategorySelect;
pub use dashboard::Dashboard;
pub use delete_confirm_modal::DeleteConfirmModal;
pub use event_modal::EventModal;
pub use navbar::Navbar;
pub use require_auth::RequireAuth;
pub use spinner::{LoadingIndicator, LoadingOverlay, Spinner};
pub use stat_card::StatCard;
pub use stock_item_card::StockItemCard;
pub use stock_list::StockList;
