// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::BTreeMap};

pub const PROPERTY_CATEGORY: &str = "category";
pub const PROPERTY_DATE_PUBLISHED: &str = "date.published";
pub const PROPERTY_DESCRIPTION: &str = "description";
pub const PROPERTY_IMAGES: &str = "images";
pub const PROPERTY_LOCALE: &str = "locale";
pub const PROPERTY_TITLE: &str = "title";
pub const PROPERTY_URL: &str = "url";
pub const PROPERTY_SITE_NAME: &str = "site.name";

/// An image attached to a shared item.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct SharedImage {
    source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
}

impl SharedImage {
    /// `source` is a URL or a path.
    pub fn new(source: impl Into<String>, alt: Option<String>) -> Self {
        Self {
            source: source.into(),
            alt,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }
}

/// Value of a shared item property.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Texts(Vec<String>),
    Images(Vec<SharedImage>),
}

impl Value {
    /// Whether the value counts as set. Empty text, zero, `false` and empty
    /// lists do not.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Boolean(value) => *value,
            Self::Integer(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::Text(value) => !value.is_empty(),
            Self::Texts(values) => !values.is_empty(),
            Self::Images(images) => !images.is_empty(),
        }
    }

    /// Scalar content of the value, `None` for lists.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Boolean(value) => Some(Cow::Owned(value.to_string())),
            Self::Integer(value) => Some(Cow::Owned(value.to_string())),
            Self::Float(value) => Some(Cow::Owned(value.to_string())),
            Self::Text(value) => Some(Cow::Borrowed(value)),
            Self::Texts(_) | Self::Images(_) => None,
        }
    }

    /// Normalizes a scalar or a list of strings into a list.
    pub fn to_texts(&self) -> Vec<Cow<'_, str>> {
        match self {
            Self::Texts(values) => values
                .iter()
                .map(|value| Cow::Borrowed(value.as_str()))
                .collect(),
            Self::Images(_) => vec![],
            scalar => scalar.as_text().into_iter().collect(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::Texts(values)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Self::Texts(values.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<SharedImage>> for Value {
    fn from(images: Vec<SharedImage>) -> Self {
        Self::Images(images)
    }
}

/// Property bag describing something to share.
///
/// The well-known accessors wrap [`SharedItem::set_property`] and
/// [`SharedItem::get_property`]; platform specific keys such as
/// `twitter:site` or `article:author` go through those directly.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(transparent)]
pub struct SharedItem {
    properties: BTreeMap<String, Value>,
}

impl SharedItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, `None` removes it.
    pub fn set_property<V: Into<Value>>(&mut self, name: impl Into<String>, value: Option<V>) {
        let name = name.into();

        match value {
            Some(value) => {
                self.properties.insert(name, value.into());
            }
            None => {
                self.properties.remove(&name);
            }
        }
    }

    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn get_property_or<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
        self.get_property(name).unwrap_or(default)
    }

    /// A property as scalar text, if it is set and present. The well-known
    /// text accessors read through this, so numeric titles still count.
    pub fn text_property(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get_property(name)
            .filter(|value| value.is_present())
            .and_then(Value::as_text)
    }

    pub fn set_title<S: Into<String>>(&mut self, title: Option<S>) {
        self.set_property(PROPERTY_TITLE, title.map(Into::<String>::into));
    }

    pub fn title(&self) -> Option<Cow<'_, str>> {
        self.text_property(PROPERTY_TITLE)
    }

    pub fn set_description<S: Into<String>>(&mut self, description: Option<S>) {
        self.set_property(PROPERTY_DESCRIPTION, description.map(Into::<String>::into));
    }

    pub fn description(&self) -> Option<Cow<'_, str>> {
        self.text_property(PROPERTY_DESCRIPTION)
    }

    pub fn set_url<S: Into<String>>(&mut self, url: Option<S>) {
        self.set_property(PROPERTY_URL, url.map(Into::<String>::into));
    }

    pub fn url(&self) -> Option<Cow<'_, str>> {
        self.text_property(PROPERTY_URL)
    }

    /// Locale code such as `en_US`.
    pub fn set_locale<S: Into<String>>(&mut self, locale: Option<S>) {
        self.set_property(PROPERTY_LOCALE, locale.map(Into::<String>::into));
    }

    pub fn locale(&self) -> Option<Cow<'_, str>> {
        self.text_property(PROPERTY_LOCALE)
    }

    /// Publication date as a unix timestamp.
    pub fn set_date_published(&mut self, timestamp: Option<i64>) {
        self.set_property(PROPERTY_DATE_PUBLISHED, timestamp);
    }

    pub fn date_published(&self) -> Option<i64> {
        match self.get_property(PROPERTY_DATE_PUBLISHED) {
            Some(Value::Integer(timestamp)) => Some(*timestamp),
            _ => None,
        }
    }

    pub fn set_category<S: Into<String>>(&mut self, category: Option<S>) {
        self.set_property(PROPERTY_CATEGORY, category.map(Into::<String>::into));
    }

    pub fn category(&self) -> Option<Cow<'_, str>> {
        self.text_property(PROPERTY_CATEGORY)
    }

    pub fn set_site_name<S: Into<String>>(&mut self, name: Option<S>) {
        self.set_property(PROPERTY_SITE_NAME, name.map(Into::<String>::into));
    }

    pub fn site_name(&self) -> Option<Cow<'_, str>> {
        self.text_property(PROPERTY_SITE_NAME)
    }

    /// Appends an image, replacing the stored list.
    pub fn add_image(&mut self, image: SharedImage) {
        let mut images = self.images().to_vec();
        images.push(image);

        self.set_property(PROPERTY_IMAGES, Some(images));
    }

    pub fn images(&self) -> &[SharedImage] {
        match self.get_property(PROPERTY_IMAGES) {
            Some(Value::Images(images)) => images,
            _ => &[],
        }
    }

    /// The first image.
    pub fn image(&self) -> Option<&SharedImage> {
        self.images().first()
    }
}
