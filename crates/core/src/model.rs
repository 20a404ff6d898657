//! Wire types for the settings document and the detected endpoint list.
//!
//! Field names follow the JSON documents served at `/src/settings.json` and
//! `/api/list` (camelCase where the documents use it).

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_IMAGE_SIZE_DESKTOP, DEFAULT_IMAGE_SIZE_MOBILE, DEFAULT_IMAGE_SIZE_TABLET,
};

/// Authored page settings. Loaded once per page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub header: Header,
    #[serde(default)]
    pub links: Vec<Link>,
    pub categories: Vec<Category>,
}

impl Settings {
    /// Picks one banner image uniformly at random.
    pub fn pick_banner<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.header.image_src.choose(rng).map(String::as_str)
    }

    /// Banner sizes, falling back to defaults when the document omits them.
    #[must_use]
    pub fn image_size(&self) -> ImageSize {
        self.header.image_size.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub status: String,
    #[serde(rename = "imageSrc", default)]
    pub image_src: Vec<String>,
    #[serde(rename = "imageSize", default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
}

/// Banner max-width per viewport class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,
}

impl ImageSize {
    #[must_use]
    pub fn mobile(&self) -> &str {
        self.mobile.as_deref().unwrap_or(DEFAULT_IMAGE_SIZE_MOBILE)
    }

    #[must_use]
    pub fn tablet(&self) -> &str {
        self.tablet.as_deref().unwrap_or(DEFAULT_IMAGE_SIZE_TABLET)
    }

    #[must_use]
    pub fn desktop(&self) -> &str {
        self.desktop.as_deref().unwrap_or(DEFAULT_IMAGE_SIZE_DESKTOP)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// A named group of endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// One invocable endpoint. `path` may carry a query string naming its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "innerDesc", default, skip_serializing_if = "Option::is_none")]
    pub inner_desc: Option<String>,
}

/// Shape of the auto-detected list served at `/api/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
}
