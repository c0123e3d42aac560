pub mod logger;
pub mod message;
pub mod table;
