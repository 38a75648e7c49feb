use crate::config::{Config, WidgetConfig};
use crate::i18n::{LOADING, translate};
use crate::models::{
    apod::{ApodRecord, MediaType},
    poll::PollState,
};
use crate::utils::text::shorten;

/// Everything the widget can show, decided from state and configuration alone.
#[derive(Debug, Clone, PartialEq)]
pub enum ApodView {
    /// The API key is missing
    ConfigError(String),
    /// Nothing fetched yet; holds the translated placeholder
    Loading(String),
    Card(CardView),
    Background(BackgroundView),
}

/// Regular dashboard presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Changes with every new picture so the host restarts the fade-in
    pub key: String,
    pub title: Option<String>,
    pub date: Option<String>,
    pub media: MediaView,
    pub copyright: Option<String>,
    pub description: Option<DescriptionView>,
    pub animation_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaView {
    Image {
        src: String,
        alt: String,
        style: String,
    },
    Video {
        src: String,
        width: u32,
        height: u32,
        style: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionView {
    pub text: String,
    pub style: String,
}

/// Full-bleed presentation: media only, painted behind the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundView {
    pub key: String,
    pub image_style: String,
    pub overlay_style: Option<String>,
    pub animation_ms: u32,
}

impl ApodView {
    /// Builds the view for the current poll state.
    pub fn present(config: &WidgetConfig, state: &PollState) -> Self {
        if !config.has_appid() {
            return ApodView::ConfigError(format!(
                "Please set the correct NASA appid in the config for module: {}.",
                Config::WIDGET_NAME
            ));
        }

        let Some(record) = state.record() else {
            return ApodView::Loading(translate(&config.language, LOADING));
        };

        if config.position.is_fullscreen() {
            ApodView::Background(BackgroundView::new(config, record))
        } else {
            ApodView::Card(CardView::new(config, record))
        }
    }
}

impl CardView {
    fn new(config: &WidgetConfig, record: &ApodRecord) -> Self {
        let description = config.show_description.then(|| {
            let text = if config.use_short_description {
                shorten(&record.description, config.max_description_length)
            } else {
                record.description.clone()
            };
            DescriptionView {
                text,
                style: description_style(config, record.media_type),
            }
        });

        Self {
            key: record.media_url.clone(),
            title: config.show_title.then(|| record.title.clone()),
            date: config
                .show_date
                .then(|| record.date.map(|d| d.format("%B %-d, %Y").to_string()))
                .flatten(),
            media: MediaView::new(config, record),
            copyright: record.copyright.as_ref().map(|c| format!("© {c}")),
            description,
            animation_ms: config.animation_speed,
        }
    }
}

impl MediaView {
    fn new(config: &WidgetConfig, record: &ApodRecord) -> Self {
        match record.media_type {
            MediaType::Image => MediaView::Image {
                src: record.media_url.clone(),
                alt: record.title.clone(),
                style: size_caps(config),
            },
            MediaType::Video => MediaView::Video {
                src: record
                    .embed_url
                    .clone()
                    .unwrap_or_else(|| record.media_url.clone()),
                width: non_zero_or(config.max_media_width, Config::DEFAULT_VIDEO_WIDTH),
                height: non_zero_or(config.max_media_height, Config::DEFAULT_VIDEO_HEIGHT),
                style: format!("border: none;{}", size_caps(config)),
            },
        }
    }
}

impl BackgroundView {
    fn new(config: &WidgetConfig, record: &ApodRecord) -> Self {
        // Videos are shown through their thumbnail
        let image_style = format!(
            "background-image: url('{}'); background-size: {}; background-position: {};",
            record.media_url, config.background_size, config.background_position
        );
        let overlay = config.background_overlay.trim();

        Self {
            key: record.media_url.clone(),
            image_style,
            overlay_style: (!overlay.is_empty()).then(|| format!("background: {overlay};")),
            animation_ms: config.animation_speed,
        }
    }
}

fn size_caps(config: &WidgetConfig) -> String {
    let mut style = String::new();
    if config.max_media_width != 0 {
        style.push_str(&format!("max-width: {}px;", config.max_media_width));
    }
    if config.max_media_height != 0 {
        style.push_str(&format!("max-height: {}px;", config.max_media_height));
    }
    style
}

fn description_style(config: &WidgetConfig, media_type: MediaType) -> String {
    if config.max_media_width != 0 {
        format!("max-width: {}px;", config.max_media_width)
    } else if media_type == MediaType::Video {
        format!("max-width: {}px;", Config::DEFAULT_VIDEO_WIDTH)
    } else {
        String::new()
    }
}

fn non_zero_or(value: u32, fallback: u32) -> u32 {
    if value == 0 { fallback } else { value }
}
