pub mod candidates;
pub mod dict;
pub mod input;
pub mod peg;
pub mod search;
pub mod segment;
pub mod settings;
pub mod system;

#[cfg(test)]
pub(crate) mod testutil;
