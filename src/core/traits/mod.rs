pub mod gateway;
pub mod operator;
pub mod preferences;
pub mod source;
