pub mod catalog;
pub mod error;
pub mod exchange;
pub mod notification;
pub mod reservation;
pub mod yacht;
