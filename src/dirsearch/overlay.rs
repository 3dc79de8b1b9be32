//! The detail overlay: a single slot that is either closed or showing one record.
//!
//! Opening while open replaces the record (last write wins; there is no stack).
//! Closing while closed does nothing. The slot holds a [`RecordId`], never a
//! copy of the record.

use crate::model::{PersonRecord, RecordId};
use crate::store::RecordStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailOverlay {
    #[default]
    Closed,
    Open(RecordId),
}

impl DetailOverlay {
    pub fn request_open(&mut self, id: RecordId) {
        log::debug!("overlay: {:?} -> Open({})", self, id.position());
        *self = DetailOverlay::Open(id);
    }

    pub fn request_close(&mut self) {
        if self.is_open() {
            log::debug!("overlay: {:?} -> Closed", self);
        }
        *self = DetailOverlay::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailOverlay::Open(_))
    }

    pub fn selected(&self) -> Option<RecordId> {
        match self {
            DetailOverlay::Open(id) => Some(*id),
            DetailOverlay::Closed => None,
        }
    }

    /// What to draw, if anything.
    pub fn view(&self, store: &RecordStore) -> Option<DetailView> {
        self.selected()
            .and_then(|id| store.get(id))
            .map(DetailView::from_record)
    }
}

/// There is no image source; the field is always shown as unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ProfileImage {
    #[default]
    Unavailable,
}

impl std::fmt::Display for ProfileImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileImage::Unavailable => f.write_str("Not available"),
        }
    }
}

/// Display fields for an open overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub profile_image: ProfileImage,
}

impl DetailView {
    pub fn from_record(record: &PersonRecord) -> Self {
        Self {
            full_name: record.full_name(),
            address: record.address.clone(),
            phone: record.phone.clone(),
            profile_image: ProfileImage::Unavailable,
        }
    }
}
