pub mod collector;
pub mod config;
pub mod guesses;
pub mod heuristic;
pub mod oauth;
pub mod output;
pub mod prompt;
pub mod search;
pub mod writer;
