pub mod ledger_service;
pub mod wallet_service;
