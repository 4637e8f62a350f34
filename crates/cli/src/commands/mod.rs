pub mod failed_ops;
pub mod group;
pub mod independence;
pub mod inspect;
pub mod replica;
