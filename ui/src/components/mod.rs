pub mod api_client;
pub mod app;
pub mod apps_menu;
pub mod balance_card;
pub mod dashboard;
pub mod dashboard_state;
pub mod filter_sheet;
pub mod icons;
pub mod multi_select;
pub mod navbar;
pub mod skeleton;
pub mod transaction_list;
pub mod user_menu;
pub mod viewport;
