// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rich message card and command reply.

use serde::Serialize;

/// One labelled value on a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich message card, rendered by the chat host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    /// RGB colour, e.g. `0xE966A1`
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub fields: Vec<CardField>,
}

impl Card {
    /// Look up a field value by its label.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// Builder for [`Card`].
#[derive(Debug, Clone)]
pub struct CardBuilder(Card);

impl CardBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self(Card {
            title: title.into(),
            color: 0,
            thumbnail: None,
            fields: Vec::new(),
        })
    }

    pub fn color(mut self, color: u32) -> Self {
        self.0.color = color;
        self
    }

    /// Empty URLs are ignored.
    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.is_empty() {
            self.0.thumbnail = Some(url);
        }
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.0.fields.push(CardField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn build(self) -> Card {
        self.0
    }
}

/// The single message sent back for one command invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    Card { card: Card },
    Text { text: String },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text { text: text.into() }
    }

    pub fn card(card: Card) -> Self {
        Reply::Card { card }
    }
}
