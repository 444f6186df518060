//! Mounting the admin UI into its host element.
//!
//! `bootstrap` is the only user-facing recovery path: when mounting fails,
//! either by returning an error or by panicking, the host element is replaced
//! with a static error page and the caller gets a `MountOutcome` back.

use crate::domain::ports::Host;
use askama::Template;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

/// Default id of the host element.
pub const HOST_ELEMENT_ID: &str = "app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    Failed { message: String },
}

impl MountOutcome {
    pub fn is_mounted(&self) -> bool {
        matches!(self, MountOutcome::Mounted)
    }
}

/// In-memory host element, for server-side rendering and tests.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    id: String,
    inner_html: String,
}

impl MemoryHost {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner_html: String::new(),
        }
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new(HOST_ELEMENT_ID)
    }
}

impl Host for MemoryHost {
    fn element_id(&self) -> &str {
        &self.id
    }

    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }
}

pub fn bootstrap<H, F, E>(host: &mut H, mount: F) -> MountOutcome
where
    H: Host,
    F: FnOnce(&mut H) -> Result<(), E>,
    E: Display,
{
    let result = panic::catch_unwind(AssertUnwindSafe(|| mount(&mut *host)));

    let message = match result {
        Ok(Ok(())) => {
            tracing::info!("Admin app mounted into #{}", host.element_id());
            return MountOutcome::Mounted;
        }
        Ok(Err(e)) => e.to_string(),
        Err(payload) => panic_message(payload.as_ref()),
    };

    tracing::error!("Error mounting admin app into #{}: {}", host.element_id(), message);
    host.set_inner_html(fallback_page(&message));
    MountOutcome::Failed { message }
}

/// Static error page shown in place of the app. The message is escaped by
/// the template.
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<div style="padding: 2rem; text-align: center; font-family: sans-serif;">
  <h1>Application Error</h1>
  <p>Failed to load the application. Please check the console for details.</p>
  <p style="color: #666; font-size: 0.9rem;">Error: {{ error }}</p>
</div>"#
)]
struct FallbackPage<'a> {
    error: &'a str,
}

/// Used when the fallback template itself fails to render.
const PLAIN_FALLBACK_PAGE: &str = "<div><h1>Application Error</h1><p>Failed to load the application.</p></div>";

pub fn fallback_page(message: &str) -> String {
    FallbackPage { error: message }.render().unwrap_or_else(|e| {
        tracing::error!("Failed to render fallback page: {}", e);
        PLAIN_FALLBACK_PAGE.to_string()
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
