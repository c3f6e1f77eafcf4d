// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Built-in job presets.  These are constants of the process: they are never
// created, changed, or removed through the API.

use std::collections::BTreeMap;

use crate::types::{JobPreset, PrintSettings};

pub const DRAFT_DOCUMENTS: &str = "draft_documents";
pub const PHOTO_QUALITY: &str = "photo_quality";
pub const TEXT_HEAVY: &str = "text_heavy";

fn preset(
    name: &str,
    orientation: &str,
    color_mode: &str,
    quality: &str,
    duplex: bool,
) -> JobPreset {
    JobPreset {
        name: name.to_string(),
        settings: PrintSettings {
            paper_size: "Letter".to_string(),
            orientation: orientation.to_string(),
            color_mode: color_mode.to_string(),
            quality: quality.to_string(),
            duplex,
            copies: 1,
        },
    }
}

/// Build the preset table, keyed by preset name.
pub fn builtin_presets() -> BTreeMap<String, JobPreset> {
    BTreeMap::from([
        (
            DRAFT_DOCUMENTS.to_string(),
            preset("Draft Documents", "Portrait", "Grayscale", "Draft", true),
        ),
        (
            PHOTO_QUALITY.to_string(),
            preset("Photo Quality", "Landscape", "Color", "High", false),
        ),
        (
            TEXT_HEAVY.to_string(),
            preset("Text Heavy", "Portrait", "Grayscale", "Standard", true),
        ),
    ])
}
