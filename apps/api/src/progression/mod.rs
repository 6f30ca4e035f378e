// Progression: level/XP bookkeeping, exercise history and its persistence.

pub mod handlers;
pub mod leveling;
pub mod models;
pub mod stats;
pub mod store;
