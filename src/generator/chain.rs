// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use crate::{generator::MetaGenerator, item::SharedItem, meta::MetaTag};

/// Runs generators in the order they were added and concatenates their tags.
#[derive(Clone, Default)]
pub struct ChainGenerator {
    generators: Vec<Box<dyn MetaGenerator>>,
}

impl ChainGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_meta_generator(&mut self, generator: impl MetaGenerator + 'static) {
        self.generators.push(Box::new(generator));
    }

    pub fn add_meta_generators(
        &mut self,
        generators: impl IntoIterator<Item = Box<dyn MetaGenerator>>,
    ) {
        self.generators.extend(generators);
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl MetaGenerator for ChainGenerator {
    fn generate_meta(&self, item: &SharedItem) -> Vec<MetaTag> {
        self.generators
            .iter()
            .enumerate()
            .flat_map(|(index, generator)| {
                let meta = generator.generate_meta(item);
                log::trace!("Generator #{} produced {} meta tags", index, meta.len());
                meta
            })
            .collect()
    }
}
