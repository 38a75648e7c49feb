pub mod apod_widget;
pub mod background;
pub mod card;
pub mod media;
pub mod status;

pub use apod_widget::ApodWidget;
