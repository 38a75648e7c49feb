pub mod use_apod;
