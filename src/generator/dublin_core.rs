// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use crate::{
    generator::{iso8601, MetaGenerator},
    item::SharedItem,
    meta::MetaTag,
};

/// Dublin Core `dc.*` tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct DublinCoreGenerator;

impl DublinCoreGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl MetaGenerator for DublinCoreGenerator {
    fn generate_meta(&self, item: &SharedItem) -> Vec<MetaTag> {
        let mut meta = vec![];

        if let Some(title) = item.title() {
            meta.push(MetaTag::name("dc.title", title));
        }

        if let Some(description) = item.description() {
            meta.push(MetaTag::name("dc.description", description));
        }

        if let Some(locale) = item.locale() {
            meta.push(
                MetaTag::name("dc.language", locale.replace('_', "-")).with_scheme("RFC1766"),
            );
        }

        if let Some(date) = item.date_published().filter(|ts| *ts != 0).and_then(iso8601) {
            meta.push(MetaTag::name("dc.date", date).with_scheme("W3CDTF"));
        }

        if let Some(category) = item.category() {
            meta.push(MetaTag::name("dc.subject", category));
        }

        if let Some(site_name) = item.site_name() {
            meta.push(MetaTag::name("dc.publisher", site_name));
        }

        meta
    }
}

#[cfg(test)]
mod test {
    use crate::{
        generator::{DublinCoreGenerator, MetaGenerator},
        item::SharedItem,
        meta::MetaTag,
    };

    #[test]
    fn title_only() {
        let mut item = SharedItem::new();
        item.set_title(Some("T"));

        assert_eq!(
            DublinCoreGenerator::new().generate_meta(&item),
            vec![MetaTag::name("dc.title", "T")]
        )
    }

    #[test]
    fn empty_item() {
        assert_eq!(DublinCoreGenerator.generate_meta(&SharedItem::new()), vec![]);
    }

    #[test]
    fn all_fields_in_order() {
        let mut item = SharedItem::new();
        item.set_site_name(Some("Example"));
        item.set_category(Some("news"));
        item.set_date_published(Some(1_709_640_000));
        item.set_locale(Some("en_US"));
        item.set_description(Some("About things"));
        item.set_title(Some("Things"));

        assert_eq!(
            DublinCoreGenerator.generate_meta(&item),
            vec![
                MetaTag::name("dc.title", "Things"),
                MetaTag::name("dc.description", "About things"),
                MetaTag::name("dc.language", "en-US").with_scheme("RFC1766"),
                MetaTag::name("dc.date", "2024-03-05T12:00:00+00:00").with_scheme("W3CDTF"),
                MetaTag::name("dc.subject", "news"),
                MetaTag::name("dc.publisher", "Example"),
            ]
        )
    }

    #[test]
    fn numeric_title() {
        let item: SharedItem = serde_yaml::from_str("title: 1984\nsite.name: 2024\n").unwrap();

        assert_eq!(
            DublinCoreGenerator.generate_meta(&item),
            vec![
                MetaTag::name("dc.title", "1984"),
                MetaTag::name("dc.publisher", "2024"),
            ]
        )
    }

    #[test]
    fn empty_text_counts_as_absent() {
        let mut item = SharedItem::new();
        item.set_title(Some(""));
        item.set_category(Some("news"));

        assert_eq!(
            DublinCoreGenerator.generate_meta(&item),
            vec![MetaTag::name("dc.subject", "news")]
        )
    }
}
