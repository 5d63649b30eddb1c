//! Person records and income derivation

mod data;
pub mod loader;

pub use data::{IncomeModel, Person};
pub use loader::{load_persons, load_persons_from_reader};
