pub mod corpus;
pub mod errors;
mod information;
pub mod input;
pub mod output;
pub mod query;
pub mod time_series;
