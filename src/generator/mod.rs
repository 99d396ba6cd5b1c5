// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use chrono::{SecondsFormat, TimeZone, Utc};
use dyn_clone::DynClone;

use crate::{
    item::{SharedImage, SharedItem},
    meta::MetaTag,
};

mod chain;
mod dublin_core;
mod open_graph;
mod twitter;

pub use chain::ChainGenerator;
pub use dublin_core::DublinCoreGenerator;
pub use open_graph::{OgType, OpenGraphGenerator};
pub use twitter::{CardType, TwitterCardGenerator};

/// Generates the meta tags to share a page on a platform.
pub trait MetaGenerator: DynClone + Send + Sync {
    fn generate_meta(&self, item: &SharedItem) -> Vec<MetaTag>;
}

dyn_clone::clone_trait_object!(MetaGenerator);

/// Hook producing the image tags of a platform.
///
/// Both methods yield nothing by default.
pub trait ImageMeta: DynClone + Send + Sync {
    /// Called once for every image of the item.
    fn open_graph(&self, _image: &SharedImage) -> Vec<MetaTag> {
        vec![]
    }

    /// Called with the first image of the item.
    fn twitter(&self, _image: &SharedImage) -> Vec<MetaTag> {
        vec![]
    }
}

dyn_clone::clone_trait_object!(ImageMeta);

#[derive(Clone, Copy, Debug, Default)]
pub struct NoImageMeta;

impl ImageMeta for NoImageMeta {}

/// ISO-8601 date of a unix timestamp, e.g. `2024-03-05T12:00:00+00:00`.
pub(crate) fn iso8601(timestamp: i64) -> Option<String> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|date| date.to_rfc3339_opts(SecondsFormat::Secs, false))
}

pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
