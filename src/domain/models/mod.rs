pub mod booking;
pub mod content;
pub mod email;
pub mod service;
pub mod slot;
