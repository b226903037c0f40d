pub mod gateway;
pub mod operator;
pub mod parsers;
pub mod preferences;
