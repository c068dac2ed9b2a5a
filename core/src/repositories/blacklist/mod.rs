pub mod ledger;
pub mod memory;

pub use ledger::RevocationLedger;
pub use memory::MemoryRevocationLedger;

#[cfg(test)]
mod tests;
