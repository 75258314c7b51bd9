pub mod health_dto;
pub mod ledger_dto;
pub mod wallet_dto;

pub use health_dto::*;
pub use ledger_dto::*;
pub use wallet_dto::*;
