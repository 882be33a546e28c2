use log::{debug, error};

use crate::front_matter::{self, FrontMatter};

use super::source::{ArticlePath, ArticleSource};

/// Handed out on every navigation and consumed by [`ArticleView::resolve`].
/// Only the ticket of the latest navigation may commit a fetched result.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    path: ArticlePath,
}

impl Ticket {
    pub fn path(&self) -> &ArticlePath {
        &self.path
    }
}

#[derive(Debug, Default)]
pub struct ArticleView {
    generation: u64,
    path: Option<ArticlePath>,
    content: FrontMatter,
}

impl ArticleView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&ArticlePath> {
        self.path.as_ref()
    }

    pub fn content(&self) -> &FrontMatter {
        &self.content
    }

    pub fn navigate(&mut self, path: ArticlePath) -> Ticket {
        self.generation += 1;
        self.path = Some(path.clone());
        self.content = FrontMatter::default();
        Ticket {
            generation: self.generation,
            path,
        }
    }

    /// Returns `false` when a later navigation has superseded `ticket`.
    pub fn resolve(&mut self, ticket: Ticket, fetched: anyhow::Result<String>) -> bool {
        if ticket.generation != self.generation {
            debug!("Discarding stale response for {}", ticket.path);
            return false;
        }
        match fetched {
            Ok(raw) => self.content = front_matter::parse(&raw),
            Err(e) => error!("Error loading markdown {}: {e:#}", ticket.path),
        }
        true
    }

    pub fn load<S: ArticleSource + ?Sized>(&mut self, source: &S, path: ArticlePath) {
        let ticket = self.navigate(path);
        let fetched = source.fetch(ticket.path());
        self.resolve(ticket, fetched);
    }
}
