pub mod asset_type;
pub mod enum_types;
pub mod ledger_entry;
pub mod wallet;
pub mod wallet_balance;

pub use asset_type::AssetType;
pub use enum_types::EntryType;
pub use ledger_entry::{LedgerEntry, NewLedgerEntry};
pub use wallet::Wallet;
pub use wallet_balance::WalletBalance;
