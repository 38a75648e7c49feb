pub mod apod;
pub mod error;
pub mod poll;
pub mod view;
