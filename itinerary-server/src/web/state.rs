//! Application state for the web layer.

use std::sync::Arc;

use chrono::{FixedOffset, Offset, Utc};

use crate::i18n::{EnglishLocalizer, Localizer};

/// Shared application state.
///
/// Generic over the plan provider so handlers can be exercised against an
/// in-memory provider.
pub struct AppState<P> {
    /// Source of OTP plans, usually cached
    pub provider: Arc<P>,

    /// Translations for user-visible text
    pub localizer: Arc<dyn Localizer>,

    /// Offset for displayed clock times
    pub display_offset: FixedOffset,
}

impl<P> AppState<P> {
    /// Create a new app state with English text and UTC clock times.
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
            localizer: Arc::new(EnglishLocalizer),
            display_offset: Utc.fix(),
        }
    }

    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Arc::new(localizer);
        self
    }

    pub fn with_display_offset(mut self, offset: FixedOffset) -> Self {
        self.display_offset = offset;
        self
    }
}

// Manual impl: `P` itself need not be `Clone`.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            localizer: Arc::clone(&self.localizer),
            display_offset: self.display_offset,
        }
    }
}
