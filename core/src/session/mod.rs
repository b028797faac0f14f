pub mod cache;


pub use cache::{MatchSession, Ownership, Zone, ZoneDelta};
