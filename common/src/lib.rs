pub mod api;
pub mod balance;
pub mod currency;
pub mod date;
pub mod filter;
pub mod nav;
pub mod style;
pub mod transaction;
pub mod transaction_list;
pub mod user;
pub mod wallet;
