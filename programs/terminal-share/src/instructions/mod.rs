// Instructions module exports
pub mod initialize;
pub mod admin;
pub mod register;
pub mod login;
pub mod reset_credential;
pub mod investment;
pub mod terminals;
pub mod quote;
pub mod dashboard;

pub use initialize::*;
pub use admin::*;
pub use register::*;
pub use login::*;
pub use reset_credential::*;
pub use investment::*;
pub use terminals::*;
pub use quote::*;
pub use dashboard::*;
