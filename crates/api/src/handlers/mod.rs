pub mod bonus;
pub mod health;
pub mod spend;
pub mod topup;
pub mod wallet_balance;
pub mod wallet_meta;
