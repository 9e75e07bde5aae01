//! Course content: sections of vocabulary units, plus reader stories.
//!
//! Deserializes the shapes served as `course.json` and `stories.json`.
//! Rendering, storage, and audio stay in the embedding application.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::types::Dictionary;

/// A full course: ordered sections, each holding ordered units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Optional grammar note shown alongside the section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar: Option<String>,
    pub units: Vec<Unit>,
}

/// A unit of vocabulary to learn, keyed like the main dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub title: String,
    pub words: Dictionary,
}

/// Position of a unit within a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitRef {
    pub section: usize,
    pub unit: usize,
}

impl UnitRef {
    pub fn new(section: usize, unit: usize) -> Self {
        Self { section, unit }
    }
}

/// A short reader story with per-line translations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub lines: Vec<StoryLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryLine {
    /// Line in Edôâma.
    #[serde(rename = "rac")]
    pub edoama: String,
    /// English translation.
    #[serde(rename = "en")]
    pub english: String,
}

impl Course {
    pub fn unit(&self, at: UnitRef) -> Option<&Unit> {
        self.sections.get(at.section)?.units.get(at.unit)
    }

    /// Previous unit in course order, crossing section boundaries.
    /// `None` for the first unit of the course.
    fn predecessor(&self, at: UnitRef) -> Option<UnitRef> {
        if at.unit > 0 {
            return Some(UnitRef::new(at.section, at.unit - 1));
        }
        // Last unit of the nearest earlier non-empty section.
        self.sections[..at.section]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, s)| !s.units.is_empty())
            .map(|(si, s)| UnitRef::new(si, s.units.len() - 1))
    }

    /// Whether the unit at `at` can be started: the course's first unit is
    /// always available, every other unit unlocks once its predecessor is in
    /// `completed`.
    pub fn is_unlocked(&self, at: UnitRef, completed: &BTreeSet<UnitRef>) -> bool {
        if self.unit(at).is_none() {
            return false;
        }
        match self.predecessor(at) {
            None => true,
            Some(prev) => completed.contains(&prev),
        }
    }
}
