//! Portable backup document.
//!
//! Field names are PascalCase on the wire:
//! `{ "Settings": [{"Key","Value"}], "Events": [{"Start","End","Excluded","Off"}] }`.
//! Timestamps use RFC 3339, e.g. `2010-01-01T08:00:00Z`.

use super::event::Event;
use super::setting::Setting;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupDocument {
    pub settings: Vec<BackupSetting>,
    pub events: Vec<BackupEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupSetting {
    pub key: String,
    pub value: String,
}

/// Event without its id; ids are regenerated on restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupEvent {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub excluded: bool,
    pub off: bool,
}

impl From<&Setting> for BackupSetting {
    fn from(s: &Setting) -> Self {
        Self {
            key: s.key.clone(),
            value: s.value.clone(),
        }
    }
}

impl From<&Event> for BackupEvent {
    fn from(e: &Event) -> Self {
        Self {
            start: e.start,
            end: e.end,
            excluded: e.excluded,
            off: e.off,
        }
    }
}

impl From<&BackupEvent> for Event {
    fn from(e: &BackupEvent) -> Self {
        Event {
            id: 0,
            start: e.start,
            end: e.end,
            excluded: e.excluded,
            off: e.off,
        }
    }
}

impl BackupDocument {
    pub fn new(settings: &[Setting], events: &[Event]) -> Self {
        Self {
            settings: settings.iter().map(BackupSetting::from).collect(),
            events: events.iter().map(BackupEvent::from).collect(),
        }
    }
}
