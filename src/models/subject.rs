//! Subject model.
//!
//! A subject is a unit of teaching load for one section: a code, the
//! faculty member who teaches it, and how many periods per week it needs.
//! Lab subjects are placed in contiguous blocks; theory subjects are
//! spread one period at a time.

use serde::{Deserialize, Serialize};

/// A subject taught to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Form-side identifier (opaque to the engine).
    #[serde(default)]
    pub id: String,
    /// Subject code, unique within a section (e.g. `"CS301"`).
    pub code: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Name of the faculty member teaching this subject.
    pub faculty_name: String,
    /// Faculty contact number, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_phone: Option<String>,
    /// Required periods per week. Signed so negative input can be
    /// reported by validation instead of failing deserialization.
    pub weekly_hours: i32,
    /// Whether this subject is scheduled in lab blocks.
    #[serde(default)]
    pub is_lab: bool,
}

impl Subject {
    /// Creates a theory subject.
    pub fn new(code: impl Into<String>, faculty_name: impl Into<String>, weekly_hours: i32) -> Self {
        Self {
            id: String::new(),
            code: code.into(),
            name: String::new(),
            faculty_name: faculty_name.into(),
            faculty_phone: None,
            weekly_hours,
            is_lab: false,
        }
    }

    /// Creates a lab subject.
    pub fn lab(code: impl Into<String>, faculty_name: impl Into<String>, weekly_hours: i32) -> Self {
        Self::new(code, faculty_name, weekly_hours).with_lab(true)
    }

    /// Sets the form identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the faculty phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.faculty_phone = Some(phone.into());
        self
    }

    /// Sets the lab flag.
    pub fn with_lab(mut self, is_lab: bool) -> Self {
        self.is_lab = is_lab;
        self
    }

    /// Number of lab blocks needed to cover the weekly hours.
    ///
    /// `ceil(weekly_hours / block_len)`; zero for non-positive hours or a
    /// zero block length.
    pub fn lab_sessions(&self, block_len: usize) -> usize {
        if self.weekly_hours <= 0 || block_len == 0 {
            return 0;
        }
        (self.weekly_hours as usize).div_ceil(block_len)
    }

    /// Whether the upper-cased code contains any of the given keywords.
    pub fn code_contains_any(&self, keywords: &[String]) -> bool {
        let code = self.code.to_uppercase();
        keywords.iter().any(|k| code.contains(k.as_str()))
    }
}
