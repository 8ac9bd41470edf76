//! Pairing logic module
//!
//! Implements first-eligible FIFO pairing with rematch avoidance

pub mod eligibility;
pub mod selector;

pub use eligibility::can_pair;
pub use selector::find_opponent;
