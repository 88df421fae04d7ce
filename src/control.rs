//! Control surface: the toggle and mode selector that drive a page.
//!
//! Every change is persisted to the [`SettingsStore`] first and then sent
//! to the page over a [`Transport`]. A page that cannot be reached is not an
//! error here; it is logged and the persisted settings still apply on the
//! next load.

use crate::bionic::{EmphasisMode, MODE_PRESETS};
use crate::error::Result;
use crate::message::{Request, Response, Transport, TransportError};
use crate::preview::render_preview;
use crate::settings::{Settings, SettingsStore};

/// Toggle plus mode selector bound to one store and one page transport.
pub struct ControlSurface<S, T> {
    store: S,
    transport: T,
    settings: Settings,
}

impl<S, T> ControlSurface<S, T>
where
    S: SettingsStore,
    T: Transport,
{
    /// Build a control surface showing the stored settings.
    pub fn load(store: S, transport: T) -> Result<Self> {
        let settings = store.load()?;
        Ok(Self {
            store,
            transport,
            settings,
        })
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    pub fn mode(&self) -> EmphasisMode {
        self.settings.bold_count
    }

    /// Flip the toggle. Returns the page's reply, if it answered.
    pub fn toggle(&mut self, enabled: bool) -> Result<Option<Response>> {
        self.settings.enabled = enabled;
        self.store.save(&self.settings)?;

        Ok(self.send(Request::Toggle {
            enabled,
            bold_count: Some(self.settings.bold_count),
        }))
    }

    /// Pick a new mode. The page is only told when the toggle is on.
    pub fn select_mode(&mut self, mode: EmphasisMode) -> Result<Option<Response>> {
        self.settings.bold_count = mode;
        self.store.save(&self.settings)?;

        if !self.settings.enabled {
            return Ok(None);
        }
        Ok(self.send(Request::UpdateSettings {
            bold_count: Some(mode),
        }))
    }

    /// Pick a mode by its slider position in [`MODE_PRESETS`].
    ///
    /// Out-of-range positions select the first preset (Auto).
    pub fn select_preset(&mut self, index: usize) -> Result<Option<Response>> {
        let (mode, _) = MODE_PRESETS.get(index).copied().unwrap_or(MODE_PRESETS[0]);
        self.select_mode(mode)
    }

    /// Ask the page whether it is currently transformed.
    pub fn page_status(&mut self) -> Option<bool> {
        match self.send(Request::GetStatus)? {
            Response::Status { enabled } => Some(enabled),
            Response::Ack { .. } => None,
        }
    }

    /// Status line under the toggle.
    pub fn status_label(&self) -> &'static str {
        if self.settings.enabled {
            "Active on this page"
        } else {
            "Inactive on this page"
        }
    }

    /// Label for the selector's current position.
    pub fn mode_label(&self) -> String {
        self.settings.bold_count.label()
    }

    /// Preview sentence for the current mode.
    pub fn preview(&self) -> String {
        render_preview(self.settings.bold_count)
    }

    /// Give back the store and transport.
    pub fn into_parts(self) -> (S, T) {
        (self.store, self.transport)
    }

    fn send(&mut self, request: Request) -> Option<Response> {
        match self.transport.send(&request) {
            Ok(response) => Some(response),
            Err(TransportError::Unreachable) => {
                tracing::warn!("could not reach the page; settings saved for next load");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "page did not accept the request");
                None
            }
        }
    }
}
