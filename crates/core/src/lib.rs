pub mod entry;
pub mod money;

pub use entry::{Direction, StatementEntry};
pub use money::{normalize_amount, Rupiah};
