pub mod fetch_account;
pub mod login;
pub mod logout;
