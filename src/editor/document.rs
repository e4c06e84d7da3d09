//! Per-tab documents and the store that owns them.

use super::resources::{replace_resource, LocalFile, PreviewResources, PreviewUrl};
use crate::config::TabTemplate;
use std::collections::HashMap;
use uuid::Uuid;

/// A titled, described, optionally illustrated item of a card-bearing section
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_name: String,
    pub image_url: Option<PreviewUrl>,
}

impl Card {
    pub fn blank() -> Self {
        Self::new(String::new(), String::new())
    }

    pub fn new(title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            image_name: String::new(),
            image_url: None,
        }
    }
}

/// Partial card update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_name: Option<String>,
}

impl CardPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    fn merge_into(self, card: &mut Card) {
        if let Some(title) = self.title {
            card.title = title;
        }
        if let Some(description) = self.description {
            card.description = description;
        }
        if let Some(image_name) = self.image_name {
            card.image_name = image_name;
        }
    }
}

/// Everything one section holds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub content: String,
    pub section_images: Vec<LocalFile>,
    pub section_image_preview: Option<PreviewUrl>,
    pub cards: Vec<Card>,
}

impl Document {
    fn from_template(template: &TabTemplate) -> Self {
        Self {
            content: template.placeholder.clone(),
            cards: template
                .cards
                .iter()
                .map(|card| Card::new(card.title.clone(), card.description.clone()))
                .collect(),
            ..Self::default()
        }
    }
}

/// Sole owner of every [`Document`] and [`Card`].
///
/// Operations addressed to an unknown tab or card are ignored.
pub struct DocumentStore<R: PreviewResources> {
    documents: HashMap<String, Document>,
    resources: R,
}

impl<R: PreviewResources> DocumentStore<R> {
    pub fn new(resources: R) -> Self {
        Self {
            documents: HashMap::new(),
            resources,
        }
    }

    pub fn with_templates(templates: &[TabTemplate], resources: R) -> Self {
        let mut store = Self::new(resources);
        for template in templates {
            // Same key the tab registry stores
            store
                .documents
                .insert(template.name.trim().to_string(), Document::from_template(template));
        }
        store
    }

    pub fn resources(&self) -> &R {
        &self.resources
    }

    /// Create the empty document backing a user-created tab
    pub fn init_document(&mut self, tab: &str) {
        self.documents.entry(tab.to_string()).or_default();
    }

    pub fn get_document(&self, tab: &str) -> Option<&Document> {
        self.documents.get(tab)
    }

    pub fn set_content(&mut self, tab: &str, markup: impl Into<String>) {
        if let Some(document) = self.documents.get_mut(tab) {
            document.content = markup.into();
        }
    }

    /// Replace the section's file list; only the first file gets a preview
    pub fn set_section_images(&mut self, tab: &str, files: Vec<LocalFile>) {
        let Some(document) = self.documents.get_mut(tab) else {
            return;
        };
        replace_resource(&mut self.resources, &mut document.section_image_preview, files.first());
        document.section_images = files;
    }

    pub fn add_card(&mut self, tab: &str) -> Option<Uuid> {
        let document = self.documents.get_mut(tab)?;
        let card = Card::blank();
        let id = card.id;
        document.cards.push(card);
        Some(id)
    }

    pub fn update_card(&mut self, tab: &str, card_id: Uuid, patch: CardPatch) {
        if let Some(card) = self.card_mut(tab, card_id) {
            patch.merge_into(card);
        }
    }

    pub fn set_card_image(&mut self, tab: &str, card_id: Uuid, file: LocalFile) {
        let Some(card) = self
            .documents
            .get_mut(tab)
            .and_then(|document| document.cards.iter_mut().find(|card| card.id == card_id))
        else {
            return;
        };
        replace_resource(&mut self.resources, &mut card.image_url, Some(&file));
        card.image_name = file.name;
    }

    fn card_mut(&mut self, tab: &str, card_id: Uuid) -> Option<&mut Card> {
        self.documents
            .get_mut(tab)?
            .cards
            .iter_mut()
            .find(|card| card.id == card_id)
    }
}
