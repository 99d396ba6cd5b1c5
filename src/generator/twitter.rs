// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::borrow::Cow;

use crate::{
    generator::{present, ImageMeta, MetaGenerator, NoImageMeta},
    item::SharedItem,
    meta::MetaTag,
    text::truncate,
};

pub const PROPERTY_CARD: &str = "twitter:card";
pub const PROPERTY_SITE: &str = "twitter:site";
pub const PROPERTY_SITE_ID: &str = "twitter:site:id";
pub const PROPERTY_CREATOR: &str = "twitter:creator";
pub const PROPERTY_CREATOR_ID: &str = "twitter:creator:id";

const TITLE_LENGTH: usize = 70;
const DESCRIPTION_LENGTH: usize = 200;

const APP_PLATFORMS: [&str; 3] = ["iphone", "ipad", "googleplay"];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CardType {
    Summary,
    SummaryLargeImage,
    Player,
    App,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
            Self::Player => "player",
            Self::App => "app",
        }
    }

    pub fn parse(card: &str) -> Option<Self> {
        match card {
            "summary" => Some(Self::Summary),
            "summary_large_image" => Some(Self::SummaryLargeImage),
            "player" => Some(Self::Player),
            "app" => Some(Self::App),
            _ => None,
        }
    }

    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary | Self::SummaryLargeImage)
    }
}

/// Twitter card `twitter:*` tags.
#[derive(Clone)]
pub struct TwitterCardGenerator {
    site: Option<String>,
    site_id: Option<String>,
    creator: Option<String>,
    creator_id: Option<String>,
    images: Box<dyn ImageMeta>,
}

impl Default for TwitterCardGenerator {
    fn default() -> Self {
        Self {
            site: None,
            site_id: None,
            creator: None,
            creator_id: None,
            images: Box::new(NoImageMeta),
        }
    }
}

/// Name, id and URL of an app on one platform.
struct App<'a> {
    name: Option<Cow<'a, str>>,
    id: Option<Cow<'a, str>>,
    url: Option<Cow<'a, str>>,
}

impl<'a> App<'a> {
    fn read(item: &'a SharedItem, platform: &str) -> Self {
        Self {
            name: item.text_property(&format!("twitter:app:name:{platform}")),
            id: item.text_property(&format!("twitter:app:id:{platform}")),
            url: item.text_property(&format!("twitter:app:url:{platform}")),
        }
    }

    fn is_complete(&self) -> bool {
        self.name.is_some() && self.id.is_some() && self.url.is_some()
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.id.is_none() && self.url.is_none()
    }

    fn push_meta(&self, platform: &str, meta: &mut Vec<MetaTag>) {
        if let (Some(name), Some(id), Some(url)) = (&self.name, &self.id, &self.url) {
            meta.push(MetaTag::name(format!("twitter:app:name:{platform}"), name.clone()));
            meta.push(MetaTag::name(format!("twitter:app:id:{platform}"), id.clone()));
            meta.push(MetaTag::name(format!("twitter:app:url:{platform}"), url.clone()));
        }
    }
}

impl TwitterCardGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_meta(mut self, images: impl ImageMeta + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    /// Default @username of the site.
    pub fn set_site(&mut self, site: Option<String>) {
        self.site = site;
    }

    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    /// Default Twitter user id of the site.
    pub fn set_site_id(&mut self, site_id: Option<String>) {
        self.site_id = site_id;
    }

    pub fn site_id(&self) -> Option<&str> {
        self.site_id.as_deref()
    }

    /// Default @username of the creator.
    pub fn set_creator(&mut self, creator: Option<String>) {
        self.creator = creator;
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    pub fn set_creator_id(&mut self, creator_id: Option<String>) {
        self.creator_id = creator_id;
    }

    pub fn creator_id(&self) -> Option<&str> {
        self.creator_id.as_deref()
    }

    /// The item's value for `name`, falling back to the configured default.
    fn resolve<'a>(
        item: &'a SharedItem,
        name: &str,
        default: Option<&'a str>,
    ) -> Option<Cow<'a, str>> {
        match item.get_property(name) {
            Some(_) => item.text_property(name),
            None => present(default).map(Cow::Borrowed),
        }
    }

    fn player_meta(item: &SharedItem, meta: &mut Vec<MetaTag>) {
        let player = item.text_property("twitter:player");
        let stream = item.text_property("twitter:player:stream");

        let (Some(player), Some(stream)) = (player, stream) else {
            log::debug!(
                "Skipping player card tags, `twitter:player` and its stream are both required."
            );
            return;
        };

        meta.push(MetaTag::name("twitter:player", player));
        meta.push(MetaTag::name("twitter:player:stream", stream));
        if let Some(width) = item.text_property("twitter:player:width") {
            meta.push(MetaTag::name("twitter:player:width", width));
        }
        if let Some(height) = item.text_property("twitter:player:height") {
            meta.push(MetaTag::name("twitter:player:height", height));
        }
    }

    fn app_meta(item: &SharedItem, meta: &mut Vec<MetaTag>) {
        let [iphone, ipad, googleplay] = APP_PLATFORMS.map(|platform| App::read(item, platform));

        if iphone.is_complete() {
            iphone.push_meta("iphone", meta);

            if ipad.is_empty() {
                iphone.push_meta("ipad", meta);
            }
        }

        ipad.push_meta("ipad", meta);
        googleplay.push_meta("googleplay", meta);
    }
}

impl MetaGenerator for TwitterCardGenerator {
    fn generate_meta(&self, item: &SharedItem) -> Vec<MetaTag> {
        let mut meta = vec![];

        let site = Self::resolve(item, PROPERTY_SITE, self.site());
        let site_id = Self::resolve(item, PROPERTY_SITE_ID, self.site_id());
        let title = item.title();

        let Some(title) = title.filter(|_| site.is_some() || site_id.is_some()) else {
            log::debug!("Skipping Twitter card tags, the item needs a title and a site.");
            return meta;
        };

        let card = match item.get_property(PROPERTY_CARD) {
            Some(card) => card.as_text().and_then(|card| CardType::parse(&card)),
            None => Some(CardType::SummaryLargeImage),
        };
        let is_summary = card.is_some_and(|card| card.is_summary());

        if let Some(site) = site {
            meta.push(MetaTag::name("twitter:site", site));
        } else if let Some(site_id) = site_id {
            meta.push(MetaTag::name("twitter:site:id", site_id));
        }

        meta.push(MetaTag::name("twitter:title", truncate(&title, TITLE_LENGTH)));

        if let Some(description) = item.description().filter(|_| is_summary) {
            meta.push(MetaTag::name(
                "twitter:description",
                truncate(&description, DESCRIPTION_LENGTH),
            ));
        }

        if let Some(image) = item.image() {
            meta.extend(self.images.twitter(image));
        }

        match card {
            Some(CardType::SummaryLargeImage) => {
                let creator = Self::resolve(item, PROPERTY_CREATOR, self.creator());
                let creator_id = Self::resolve(item, PROPERTY_CREATOR_ID, self.creator_id());

                if let Some(creator) = creator {
                    meta.push(MetaTag::name("twitter:creator", creator));
                } else if let Some(creator_id) = creator_id {
                    meta.push(MetaTag::name("twitter:creator:id", creator_id));
                }
            }
            Some(CardType::Player) => Self::player_meta(item, &mut meta),
            Some(CardType::App) => Self::app_meta(item, &mut meta),
            Some(CardType::Summary) | None => (),
        }

        meta.push(MetaTag::name("twitter:widgets:csp", "on"));

        meta
    }
}
