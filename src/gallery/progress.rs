// SPDX-License-Identifier: MPL-2.0
//! Progress bar width and busy pointer state.

use crate::api::DownloadProgress;

/// Width of the progress bar (0-100) plus whether the pointer should show
/// the progress cursor.
///
/// Overlapping requests are counted, so the pointer only returns to normal
/// once the last outstanding request has finished.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProgressIndicator {
    percent: u8,
    outstanding: usize,
}

impl ProgressIndicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A request was sent: reset the bar and show the busy pointer.
    pub fn begin(&mut self) {
        self.percent = 0;
        self.outstanding += 1;
    }

    /// Body download progressed. Unknown totals leave the bar untouched.
    pub fn update(&mut self, progress: DownloadProgress) {
        if let Some(percent) = progress.percent() {
            self.percent = percent;
        }
    }

    /// A request completed, successfully or not.
    pub fn finish(&mut self) {
        self.percent = 100;
        self.outstanding = self.outstanding.saturating_sub(1);
    }

    /// A superseded request completed. Only the busy count changes; the bar
    /// keeps showing the request that replaced it.
    pub fn release(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.outstanding > 0
    }
}
