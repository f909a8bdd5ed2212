// Per-language content records: the data layer of the portfolio.
// The store is the only component with durable state; everything else
// (translation, extraction, chat) reads and writes through it.

pub mod defaults;
pub mod handlers;
pub mod models;
pub mod store;
