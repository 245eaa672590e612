pub mod balance;
pub mod state_machine;
