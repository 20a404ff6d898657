//! The invocation display region.
//!
//! One region is reused for every invocation. Each `open` starts a new
//! generation; a response carrying an older ticket is dropped instead of
//! overwriting the newer invocation's output. Replacing an image releases its
//! payload, and the release count is tracked.

use crate::model::Item;

/// What the region currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalContent {
    #[default]
    Empty,
    Loading,
    /// Pretty-printed JSON text.
    Json(String),
    Image { content_type: String, bytes: Vec<u8> },
    /// Plain-text error message.
    Error(String),
}

impl ModalContent {
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// Handle for one invocation. Only the latest ticket may resolve the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationTicket {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Modal {
    title: String,
    description: String,
    endpoint: Option<String>,
    content: ModalContent,
    generation: u64,
    released_images: u64,
}

impl Modal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the region for `item` and starts a new generation.
    pub fn open(&mut self, item: &Item) -> InvocationTicket {
        self.generation = self.generation.wrapping_add(1);
        self.title.clone_from(&item.name);
        self.description.clone_from(&item.desc);
        self.endpoint = None;
        self.replace_content(ModalContent::Empty);
        InvocationTicket { generation: self.generation }
    }

    #[must_use]
    pub fn is_current(&self, ticket: InvocationTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Shows the loading state. Returns false for a superseded ticket.
    pub fn start_loading(&mut self, ticket: InvocationTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.replace_content(ModalContent::Loading);
        true
    }

    /// Shows a successful response together with the URL that produced it.
    pub fn resolve(&mut self, ticket: InvocationTicket, endpoint: String, content: ModalContent) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded invocation result"
            );
            return false;
        }
        self.endpoint = Some(endpoint);
        self.replace_content(content);
        true
    }

    /// Shows an error message. The region stays open.
    pub fn fail(&mut self, ticket: InvocationTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(stale = ticket.generation, "discarding superseded invocation error");
            return false;
        }
        self.replace_content(ModalContent::Error(message.into()));
        true
    }

    fn replace_content(&mut self, content: ModalContent) -> ModalContent {
        let previous = std::mem::replace(&mut self.content, content);
        if previous.is_image() {
            self.released_images = self.released_images.saturating_add(1);
        }
        previous
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    #[must_use]
    pub const fn content(&self) -> &ModalContent {
        &self.content
    }

    /// Takes the content out, leaving the region empty.
    pub fn take_content(&mut self) -> ModalContent {
        self.replace_content(ModalContent::Empty)
    }

    /// Number of image payloads released by later content or taken out.
    #[must_use]
    pub const fn released_images(&self) -> u64 {
        self.released_images
    }
}
