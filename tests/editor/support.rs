//! Fake hosts shared by the editor tests
#![allow(dead_code)]

use chatolution::editor::{LocalFile, PreviewResources, PreviewUrl, TextEditingHost};

/// Hands out numbered handles and remembers every create/release in order
#[derive(Debug, Default)]
pub struct CountingResources {
    pub events: Vec<String>,
    pub created: Vec<PreviewUrl>,
    pub released: Vec<PreviewUrl>,
}

impl CountingResources {
    pub fn live(&self) -> Vec<&PreviewUrl> {
        self.created.iter().filter(|url| !self.released.contains(url)).collect()
    }
}

impl PreviewResources for CountingResources {
    fn create(&mut self, file: &LocalFile) -> PreviewUrl {
        let url = PreviewUrl::new(format!("fake:{}:{}", self.created.len() + 1, file.name));
        self.events.push(format!("create {}", url));
        self.created.push(url.clone());
        url
    }

    fn release(&mut self, url: &PreviewUrl) {
        self.events.push(format!("release {}", url));
        self.released.push(url.clone());
    }
}

/// Records every command; each command appends `[name]` to the region
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub markup: String,
    pub in_region: bool,
    pub collapses: usize,
    pub commands: Vec<(String, Option<String>)>,
}

impl TextEditingHost for RecordingHost {
    fn load_region(&mut self, markup: &str) {
        self.markup = markup.to_string();
        self.in_region = false;
    }

    fn region_markup(&self) -> String {
        self.markup.clone()
    }

    fn selection_in_region(&self) -> bool {
        self.in_region
    }

    fn collapse_selection_to_end(&mut self) {
        self.collapses += 1;
        self.in_region = true;
    }

    fn exec_command(&mut self, name: &str, value: Option<&str>) -> bool {
        self.commands.push((name.to_string(), value.map(str::to_string)));
        self.markup.push_str(&format!("[{}]", name));
        true
    }
}

pub fn file(name: &str) -> LocalFile {
    LocalFile::from_path(format!("/tmp/uploads/{}", name))
}
