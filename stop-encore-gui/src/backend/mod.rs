pub mod export;
pub mod media;
pub mod worker;
