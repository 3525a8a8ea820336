//! Exact-match route table.

use std::sync::Arc;

use crate::server::handler::{ClientSocket, HandlerFn, HandlerFuture, Route};

/// An ordered collection of routes with exact path matching.
///
/// Registration order matters only for duplicate paths: the most recently
/// registered route wins. The router is populated before the server starts
/// and is read-only afterward, so no synchronization is needed.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a handler for a path.
    ///
    /// Any string is accepted as a path, including the empty string and
    /// paths already registered; no syntax validation is performed.
    pub fn register<F>(&mut self, path: impl Into<String>, handler: F)
    where
        F: for<'a> Fn(&'a mut ClientSocket) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.routes.push(Route {
            path: path.into(),
            handler: Arc::new(handler),
        });
    }

    /// Look up the handler for a path.
    ///
    /// Scans from the newest registration to the oldest and returns the
    /// first route whose path is exactly equal to the query. `None` is an
    /// expected outcome, not an error; callers respond with the canonical
    /// 404.
    pub fn find(&self, path: &str) -> Option<&HandlerFn> {
        self.routes
            .iter()
            .rev()
            .find(|route| route.path == path)
            .map(|route| &route.handler)
    }

    /// The number of registered routes, duplicates included.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
