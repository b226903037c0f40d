pub mod forget;
pub mod push;
