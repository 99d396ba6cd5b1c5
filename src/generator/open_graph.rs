// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::borrow::Cow;

use crate::{
    generator::{iso8601, present, ImageMeta, MetaGenerator, NoImageMeta},
    item::{SharedItem, Value},
    meta::MetaTag,
};

pub const PROPERTY_AUTHOR: &str = "article:author";
pub const PROPERTY_PUBLISHER: &str = "article:publisher";
pub const PROPERTY_TAG: &str = "article:tag";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OgType {
    Article,
    Website,
}

impl OgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Website => "website",
        }
    }
}

/// Open Graph `og:*` and `article:*` tags.
#[derive(Clone)]
pub struct OpenGraphGenerator {
    publisher: Option<String>,
    images: Box<dyn ImageMeta>,
}

impl Default for OpenGraphGenerator {
    fn default() -> Self {
        Self {
            publisher: None,
            images: Box::new(NoImageMeta),
        }
    }
}

impl OpenGraphGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_meta(mut self, images: impl ImageMeta + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    /// Default publisher of articles, a Facebook page URL or ID. Items
    /// override it with the `article:publisher` property.
    pub fn set_publisher(&mut self, publisher: Option<String>) {
        self.publisher = publisher;
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    fn resolve_publisher<'a>(&'a self, item: &'a SharedItem) -> Option<Cow<'a, str>> {
        match item.get_property(PROPERTY_PUBLISHER) {
            Some(_) => item.text_property(PROPERTY_PUBLISHER),
            None => present(self.publisher()).map(Cow::Borrowed),
        }
    }
}

fn list_property<'a>(item: &'a SharedItem, name: &str) -> Vec<Cow<'a, str>> {
    item.get_property(name)
        .filter(|value| value.is_present())
        .map(Value::to_texts)
        .unwrap_or_default()
}

impl MetaGenerator for OpenGraphGenerator {
    fn generate_meta(&self, item: &SharedItem) -> Vec<MetaTag> {
        let mut meta = vec![];

        let (title, url) = match (item.title(), item.url()) {
            (Some(title), Some(url)) if item.image().is_some() => (title, url),
            _ => {
                log::debug!("Skipping Open Graph tags, the item needs a title, URL and image.");
                return meta;
            }
        };

        let date_published = item.date_published().filter(|ts| *ts != 0);
        let category = item.category();
        let authors = list_property(item, PROPERTY_AUTHOR);
        let publisher = self.resolve_publisher(item);
        let tags = list_property(item, PROPERTY_TAG);

        let og_type = if date_published.is_some()
            || !authors.is_empty()
            || category.is_some()
            || publisher.is_some()
            || !tags.is_empty()
        {
            OgType::Article
        } else {
            OgType::Website
        };

        meta.push(MetaTag::property("og:title", title));
        if let Some(description) = item.description() {
            meta.push(MetaTag::property("og:description", description));
        }
        meta.push(MetaTag::property("og:url", url));
        meta.push(MetaTag::property("og:type", og_type.as_str()));

        for image in item.images() {
            meta.extend(self.images.open_graph(image));
        }

        if let Some(locale) = item.locale() {
            meta.push(MetaTag::property("og:locale", locale));
        }

        if let Some(site_name) = item.site_name() {
            meta.push(MetaTag::property("og:site_name", site_name));
        }

        if og_type == OgType::Article {
            for author in authors {
                meta.push(MetaTag::property("article:author", author));
            }
            if let Some(date) = date_published.and_then(iso8601) {
                meta.push(MetaTag::property("article:published_time", date));
            }
            if let Some(publisher) = publisher {
                meta.push(MetaTag::property("article:publisher", publisher));
            }
            if let Some(category) = category {
                meta.push(MetaTag::property("article:section", category));
            }
            for tag in tags {
                meta.push(MetaTag::property("article:tag", tag));
            }
        }

        meta
    }
}
