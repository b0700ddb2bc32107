#[macro_use]
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate async_trait;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

mod result;
pub use result::*;

pub mod config;
pub mod database;
pub mod email;
pub mod flows;
pub mod r#impl;
pub mod models;
pub mod util;

pub use config::Config;
pub use database::Database;
pub use email::Mailer;


/// Keyward state
#[derive(Default, Clone)]
pub struct Keyward {
    pub config: Config,
    pub database: Database,
    pub mailer: Mailer,
}
