// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use build_html::{escape_html, Html};

/// Attribute holding the key of a meta tag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetaKind {
    Name,
    Property,
}

impl MetaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetaTag {
    pub kind: MetaKind,
    pub key: String,
    pub value: String,
    pub scheme: Option<String>,
}

impl MetaTag {
    /// A tag keyed by the `name` attribute.
    pub fn name(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: MetaKind::Name,
            key: key.into(),
            value: value.into(),
            scheme: None,
        }
    }

    /// A tag keyed by the `property` attribute.
    pub fn property(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: MetaKind::Property,
            key: key.into(),
            value: value.into(),
            scheme: None,
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }
}

impl Html for MetaTag {
    fn to_html_string(&self) -> String {
        let scheme = self
            .scheme
            .as_ref()
            .map(|scheme| format!(" scheme=\"{}\"", escape_html(scheme)))
            .unwrap_or_default();

        format!(
            "<meta {}=\"{}\" content=\"{}\"{}>",
            self.kind.as_str(),
            escape_html(&self.key),
            escape_html(&self.value),
            scheme
        )
    }
}
