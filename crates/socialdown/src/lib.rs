mod client;
mod error;
mod facebook;
mod instagram;
mod mediafire;
pub mod models;
mod pinterest;
mod spotify;
mod tiktok;
mod x;
mod youtube;

pub use client::SocialdownClient;
pub use error::SocialdownError;
pub use models::{
    FacebookResponse, InstagramResponse, MediaFireResponse, PinterestMedia, PinterestResponse,
    SpotifyResponse, TikTokEntry, TikTokLink, TikTokResponse, XMedia, XResponse, YouTubeEntry,
    YouTubeResponse, YtFormat,
};

pub type Result<T> = std::result::Result<T, SocialdownError>;
