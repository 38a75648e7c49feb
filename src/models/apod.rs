use chrono::NaiveDate;
use serde::Deserialize;
use url::Url;

use crate::models::error::AppError;

/// Kind of media published for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

/// Raw body returned by the APOD endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApodResponse {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Normalized picture of the day, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ApodRecord {
    pub title: String,
    pub description: String,
    pub copyright: Option<String>,
    pub media_type: MediaType,
    /// Still image to show: the HD image, or the video thumbnail
    pub media_url: String,
    /// Embeddable player URL, videos only
    pub embed_url: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TryFrom<ApodResponse> for ApodRecord {
    type Error = AppError;

    fn try_from(data: ApodResponse) -> Result<Self, Self::Error> {
        let url = data
            .url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::DataError("response has no media url".to_string()))?;

        let (media_type, media_url, embed_url) = match data.media_type.as_str() {
            "image" => {
                let media_url = data.hdurl.filter(|hd| !hd.trim().is_empty()).unwrap_or(url);
                (MediaType::Image, media_url, None)
            }
            "video" => {
                let video = VideoId::from_url(&url).ok_or_else(|| {
                    AppError::UnknownMedia(format!("unrecognized video url: {url}"))
                })?;
                (MediaType::Video, video.thumbnail_url(), Some(embed_url(&url)))
            }
            other => {
                return Err(AppError::UnknownMedia(format!(
                    "media type '{other}' is neither image nor video"
                )));
            }
        };

        let copyright = data
            .copyright
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let date = data
            .date
            .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok());

        Ok(Self {
            title: data.title,
            description: data.explanation,
            copyright,
            media_type,
            media_url,
            embed_url,
            date,
        })
    }
}

/// Video hosting platforms whose thumbnails can be derived from an id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoPlatform {
    YouTube,
    Vimeo,
}

/// Platform video identifier extracted from an APOD video url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId {
    pub platform: VideoPlatform,
    pub id: String,
}

impl VideoId {
    /// Extracts the identifier from the known YouTube and Vimeo url shapes.
    pub fn from_url(raw: &str) -> Option<Self> {
        // APOD sometimes serves protocol-relative urls
        let full = if raw.starts_with("//") {
            format!("https:{raw}")
        } else {
            raw.to_string()
        };
        let parsed = Url::parse(&full).ok()?;
        let host = parsed.host_str()?.to_lowercase();
        let host = host
            .strip_prefix("www.")
            .or_else(|| host.strip_prefix("m."))
            .unwrap_or(&host);

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        match host {
            "youtube.com" | "youtube-nocookie.com" => {
                let from_query = parsed
                    .query_pairs()
                    .find(|(key, _)| key == "v" || key == "vi")
                    .map(|(_, value)| value.into_owned());
                let from_path = match segments.as_slice() {
                    ["embed" | "v" | "vi" | "shorts", id, ..] => Some((*id).to_string()),
                    _ => None,
                };
                from_query
                    .or(from_path)
                    .filter(|id| is_youtube_id(id))
                    .map(|id| Self::new(VideoPlatform::YouTube, id))
            }
            "youtu.be" => segments
                .first()
                .filter(|id| is_youtube_id(id))
                .map(|id| Self::new(VideoPlatform::YouTube, *id)),
            "vimeo.com" | "player.vimeo.com" => segments
                .iter()
                .find(|seg| seg.chars().all(|c| c.is_ascii_digit()))
                .map(|id| Self::new(VideoPlatform::Vimeo, *id)),
            _ => None,
        }
    }

    fn new(platform: VideoPlatform, id: impl Into<String>) -> Self {
        Self {
            platform,
            id: id.into(),
        }
    }

    /// Still image representing the video.
    pub fn thumbnail_url(&self) -> String {
        match self.platform {
            VideoPlatform::YouTube => {
                format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", self.id)
            }
            VideoPlatform::Vimeo => format!("https://vumbnail.com/{}.jpg", self.id),
        }
    }
}

fn is_youtube_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Rewrites YouTube players to the privacy-enhanced domain.
fn embed_url(url: &str) -> String {
    url.replace("www.youtube.com", "www.youtube-nocookie.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn youtube(id: &str) -> Option<VideoId> {
        Some(VideoId::new(VideoPlatform::YouTube, id))
    }

    #[test]
    fn test_youtube_watch_url() {
        assert_eq!(
            VideoId::from_url("https://www.youtube.com/watch?v=abc123"),
            youtube("abc123")
        );
        assert_eq!(
            VideoId::from_url("https://m.youtube.com/watch?feature=share&vi=x_Y-z"),
            youtube("x_Y-z")
        );
    }

    #[test]
    fn test_youtube_path_shapes() {
        assert_eq!(
            VideoId::from_url("https://www.youtube.com/embed/abc123?rel=0"),
            youtube("abc123")
        );
        assert_eq!(
            VideoId::from_url("//www.youtube.com/embed/abc123"),
            youtube("abc123")
        );
        assert_eq!(
            VideoId::from_url("https://www.youtube-nocookie.com/v/abc123"),
            youtube("abc123")
        );
        assert_eq!(
            VideoId::from_url("https://youtube.com/shorts/abc123"),
            youtube("abc123")
        );
        assert_eq!(VideoId::from_url("https://youtu.be/abc123"), youtube("abc123"));
    }

    #[test]
    fn test_vimeo_numeric_segment() {
        let expected = Some(VideoId::new(VideoPlatform::Vimeo, "123456"));
        assert_eq!(VideoId::from_url("https://vimeo.com/123456"), expected);
        assert_eq!(
            VideoId::from_url("https://player.vimeo.com/video/123456?color=fff"),
            expected
        );
    }

    #[test]
    fn test_unrecognized_urls() {
        assert_eq!(VideoId::from_url("https://apod.nasa.gov/apod/movie.mp4"), None);
        assert_eq!(VideoId::from_url("https://www.youtube.com/channel"), None);
        assert_eq!(VideoId::from_url("https://vimeo.com/channels/staff"), None);
        assert_eq!(VideoId::from_url("not a url"), None);
    }

    #[test]
    fn test_thumbnail_urls() {
        assert_eq!(
            VideoId::new(VideoPlatform::YouTube, "abc123").thumbnail_url(),
            "https://img.youtube.com/vi/abc123/maxresdefault.jpg"
        );
        assert_eq!(
            VideoId::new(VideoPlatform::Vimeo, "42").thumbnail_url(),
            "https://vumbnail.com/42.jpg"
        );
    }

    #[test]
    fn test_embed_url_uses_nocookie_domain() {
        assert_eq!(
            embed_url("https://www.youtube.com/embed/abc123"),
            "https://www.youtube-nocookie.com/embed/abc123"
        );
        assert_eq!(embed_url("https://vimeo.com/42"), "https://vimeo.com/42");
    }
}
