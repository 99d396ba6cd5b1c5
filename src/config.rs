// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::generator::{
    ChainGenerator, DublinCoreGenerator, OpenGraphGenerator, TwitterCardGenerator,
};

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_generators")]
    pub generators: Vec<GeneratorKind>,
    #[serde(default)]
    pub open_graph: OpenGraphConfig,
    #[serde(default)]
    pub twitter: TwitterConfig,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    DublinCore,
    OpenGraph,
    Twitter,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct OpenGraphConfig {
    pub publisher: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct TwitterConfig {
    pub site: Option<String>,
    pub site_id: Option<String>,
    pub creator: Option<String>,
    pub creator_id: Option<String>,
}

fn default_generators() -> Vec<GeneratorKind> {
    vec![
        GeneratorKind::DublinCore,
        GeneratorKind::OpenGraph,
        GeneratorKind::Twitter,
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generators: default_generators(),
            open_graph: OpenGraphConfig::default(),
            twitter: TwitterConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config {:?}", path))?;

        Self::parse(&contents).with_context(|| format!("Invalid config {:?}", path))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Chain of the configured generators, in the listed order.
    pub fn build_chain(&self) -> ChainGenerator {
        let mut chain = ChainGenerator::new();

        for kind in &self.generators {
            match kind {
                GeneratorKind::DublinCore => chain.add_meta_generator(DublinCoreGenerator::new()),
                GeneratorKind::OpenGraph => {
                    let mut generator = OpenGraphGenerator::new();
                    generator.set_publisher(self.open_graph.publisher.clone());
                    chain.add_meta_generator(generator);
                }
                GeneratorKind::Twitter => {
                    let mut generator = TwitterCardGenerator::new();
                    generator.set_site(self.twitter.site.clone());
                    generator.set_site_id(self.twitter.site_id.clone());
                    generator.set_creator(self.twitter.creator.clone());
                    generator.set_creator_id(self.twitter.creator_id.clone());
                    chain.add_meta_generator(generator);
                }
            }
        }

        log::debug!("Built a chain of {} meta generators", chain.len());

        chain
    }
}

#[cfg(test)]
mod test {
    use crate::{
        config::{Config, GeneratorKind, TwitterConfig},
        generator::MetaGenerator,
        item::SharedItem,
        meta::MetaTag,
    };

    #[test]
    fn defaults() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
        assert_eq!(Config::default().build_chain().len(), 3);
    }

    #[test]
    fn parse() {
        let config = Config::parse(
            r#"
generators: [twitter, dublin_core]
twitter:
  site: "@example"
  creator_id: "42"
"#,
        )
        .unwrap();

        assert_eq!(
            config.generators,
            vec![GeneratorKind::Twitter, GeneratorKind::DublinCore]
        );
        assert_eq!(
            config.twitter,
            TwitterConfig {
                site: Some("@example".into()),
                site_id: None,
                creator: None,
                creator_id: Some("42".into()),
            }
        );
        assert_eq!(config.open_graph.publisher, None);
    }

    #[test]
    fn unknown_generator() {
        assert!(Config::parse("generators: [myspace]").is_err());
    }

    #[test]
    fn chain_follows_config() {
        let config = Config::parse(include_str!("../data/config.yaml")).unwrap();
        let item: SharedItem = serde_yaml::from_str(include_str!("../data/item.yaml")).unwrap();

        let meta = config.build_chain().generate_meta(&item);

        assert_eq!(meta.first(), Some(&MetaTag::name("dc.title", "Hello, World!")));
        assert_eq!(
            meta.last(),
            Some(&MetaTag::name("twitter:widgets:csp", "on"))
        );
        assert!(meta.contains(&MetaTag::property(
            "article:publisher",
            "https://www.facebook.com/example"
        )));
        assert!(meta.contains(&MetaTag::name("twitter:creator", "@author")));
    }
}
