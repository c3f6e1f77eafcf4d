// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for PrintDesk printer profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the seed profile that exists from startup and cannot be deleted.
pub const DEFAULT_PROFILE_ID: &str = "default";

pub const DEFAULT_PAPER_SIZE: &str = "Letter";
pub const DEFAULT_ORIENTATION: &str = "Portrait";
pub const DEFAULT_COLOR_MODE: &str = "Color";
pub const DEFAULT_QUALITY: &str = "Standard";
pub const DEFAULT_COPIES: i64 = 1;

/// Unique identifier for a printer profile.
///
/// Generated ids are UUID v4 strings; the seed profile uses the literal
/// `"default"`, so this wraps a string rather than a `Uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// A fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The id of the protected seed profile.
    pub fn default_profile() -> Self {
        Self(DEFAULT_PROFILE_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the protected seed profile.
    pub fn is_default_profile(&self) -> bool {
        self.0 == DEFAULT_PROFILE_ID
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProfileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Loosely-specified print settings supplied by a client.
///
/// Every field is optional. Unknown keys are ignored on deserialisation and
/// an explicit JSON `null` is treated the same as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileFields {
    pub name: Option<String>,
    pub paper_size: Option<String>,
    pub orientation: Option<String>,
    pub color_mode: Option<String>,
    pub quality: Option<String>,
    pub duplex: Option<bool>,
    pub copies: Option<i64>,
    pub is_favorite: Option<bool>,
}

impl ProfileFields {
    /// The name exactly as supplied, unless it is missing or whitespace-only.
    pub fn non_empty_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// Print settings after default substitution.
///
/// Values are free-form: no enumerated-value checks are applied, callers may
/// pass any paper size or quality string they like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintSettings {
    pub paper_size: String,
    pub orientation: String,
    pub color_mode: String,
    pub quality: String,
    pub duplex: bool,
    pub copies: i64,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            paper_size: DEFAULT_PAPER_SIZE.to_string(),
            orientation: DEFAULT_ORIENTATION.to_string(),
            color_mode: DEFAULT_COLOR_MODE.to_string(),
            quality: DEFAULT_QUALITY.to_string(),
            duplex: false,
            copies: DEFAULT_COPIES,
        }
    }
}

impl PrintSettings {
    /// Overwrite every setting that is present in `fields`.
    pub fn apply(&mut self, fields: &ProfileFields) {
        if let Some(paper_size) = &fields.paper_size {
            self.paper_size.clone_from(paper_size);
        }
        if let Some(orientation) = &fields.orientation {
            self.orientation.clone_from(orientation);
        }
        if let Some(color_mode) = &fields.color_mode {
            self.color_mode.clone_from(color_mode);
        }
        if let Some(quality) = &fields.quality {
            self.quality.clone_from(quality);
        }
        if let Some(duplex) = fields.duplex {
            self.duplex = duplex;
        }
        if let Some(copies) = fields.copies {
            self.copies = copies;
        }
    }
}

/// Resolve a field bag into concrete settings, substituting the documented
/// default for every absent field.
///
/// This is the only place defaults are applied; profile creation and print
/// preview both go through it.
pub fn resolve_with_defaults(fields: &ProfileFields) -> PrintSettings {
    let mut settings = PrintSettings::default();
    settings.apply(fields);
    settings
}

/// A named printer configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterProfile {
    pub id: ProfileId,
    pub name: String,
    #[serde(flatten)]
    pub settings: PrintSettings,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    /// Absent until the profile has been updated at least once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PrinterProfile {
    /// Build a new profile from a field bag. The caller is responsible for
    /// having validated the name.
    pub fn new(id: ProfileId, name: String, fields: &ProfileFields) -> Self {
        Self {
            id,
            name,
            settings: resolve_with_defaults(fields),
            is_favorite: fields.is_favorite.unwrap_or(false),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// The seed profile present from startup.
    pub fn seed_default() -> Self {
        Self {
            id: ProfileId::default_profile(),
            name: "Default Profile".to_string(),
            settings: PrintSettings::default(),
            is_favorite: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Merge a partial update: only fields present in `fields` change.
    pub fn merge(&mut self, fields: &ProfileFields) {
        if let Some(name) = &fields.name {
            self.name.clone_from(name);
        }
        self.settings.apply(fields);
        if let Some(is_favorite) = fields.is_favorite {
            self.is_favorite = is_favorite;
        }
        self.updated_at = Some(Utc::now());
    }
}

/// A fixed, read-only bundle of print settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPreset {
    pub name: String,
    #[serde(flatten)]
    pub settings: PrintSettings,
}

/// Text attached to every preview response.
pub const PREVIEW_TEXT: &str = "Print preview generated successfully";

/// Computed preview descriptor for a set of print settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintPreview {
    #[serde(flatten)]
    pub settings: PrintSettings,
    pub estimated_pages: u32,
    pub preview_text: String,
}

impl PrintPreview {
    /// Pure: resolves defaults and never touches any store.
    pub fn from_fields(fields: &ProfileFields) -> Self {
        Self {
            settings: resolve_with_defaults(fields),
            estimated_pages: 1,
            preview_text: PREVIEW_TEXT.to_string(),
        }
    }
}
