// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory printer profile store.
//
// Profiles live for the lifetime of the process; nothing is written to disk.
// A single mutex guards the whole map so every operation is one critical
// section, and no lock is ever held across an `.await`.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, instrument, warn};

use crate::error::{PrintdeskError, Result};
use crate::presets::builtin_presets;
use crate::types::{JobPreset, PrintPreview, PrinterProfile, ProfileFields, ProfileId};

/// Message returned when a profile id is unknown.
pub const NOT_FOUND_MESSAGE: &str = "Profile not found";

/// Message returned when a create request carries no usable name.
pub const NAME_REQUIRED_MESSAGE: &str = "Profile name is required";

/// Message returned when a client tries to delete the seed profile.
pub const PROTECTED_MESSAGE: &str = "Cannot delete default profile";

/// Profiles plus the order they were inserted in.
#[derive(Debug)]
struct Profiles {
    by_id: HashMap<ProfileId, PrinterProfile>,
    order: Vec<ProfileId>,
}

impl Profiles {
    fn seeded() -> Self {
        let seed = PrinterProfile::seed_default();
        let id = seed.id.clone();
        Self {
            by_id: HashMap::from([(id.clone(), seed)]),
            order: vec![id],
        }
    }

    /// Draw random ids until one is not already in use.
    fn fresh_id(&self) -> ProfileId {
        loop {
            let id = ProfileId::new();
            if !self.by_id.contains_key(&id) {
                return id;
            }
            warn!(profile_id = %id, "generated profile id collided, drawing again");
        }
    }
}

/// Process-wide profile collection and read-only preset table.
///
/// Construct once at startup and share behind an `Arc`.
#[derive(Debug)]
pub struct ProfileStore {
    profiles: Mutex<Profiles>,
    presets: BTreeMap<String, JobPreset>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Create a store holding only the protected `default` profile.
    pub fn new() -> Self {
        debug!("profile store initialised with default profile");
        Self {
            profiles: Mutex::new(Profiles::seeded()),
            presets: builtin_presets(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Profiles> {
        // Every mutation is a single insert or remove, so a panic elsewhere
        // cannot leave the map half-written.
        self.profiles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All current profiles: the seed first, then insertion order.
    pub fn list(&self) -> Vec<PrinterProfile> {
        let profiles = self.lock();
        let all: Vec<PrinterProfile> = profiles
            .order
            .iter()
            .filter_map(|id| profiles.by_id.get(id).cloned())
            .collect();
        debug!(count = all.len(), "listed profiles");
        all
    }

    /// Number of live profiles.
    pub fn len(&self) -> usize {
        self.lock().by_id.len()
    }

    /// False in practice, since the seed profile cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.lock().by_id.is_empty()
    }

    /// Look up one profile by id.
    pub fn get(&self, id: &ProfileId) -> Result<PrinterProfile> {
        self.lock()
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| PrintdeskError::NotFound(NOT_FOUND_MESSAGE.into()))
    }

    /// Create a profile from a field bag.
    ///
    /// # Errors
    ///
    /// `Validation` if `name` is missing or blank; the store is unchanged.
    #[instrument(skip_all)]
    pub fn create(&self, input: &ProfileFields) -> Result<PrinterProfile> {
        let Some(name) = input.non_empty_name() else {
            debug!("rejected profile without a name");
            return Err(PrintdeskError::Validation(NAME_REQUIRED_MESSAGE.into()));
        };

        let mut profiles = self.lock();
        let id = profiles.fresh_id();
        let profile = PrinterProfile::new(id.clone(), name.to_string(), input);
        profiles.by_id.insert(id.clone(), profile.clone());
        profiles.order.push(id);

        info!(profile_id = %profile.id, name = %profile.name, "profile created");
        Ok(profile)
    }

    /// Apply a partial update to an existing profile.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` is not in the store; the store is unchanged.
    #[instrument(skip(self, input), fields(profile_id = %id))]
    pub fn update(&self, id: &ProfileId, input: &ProfileFields) -> Result<PrinterProfile> {
        let mut profiles = self.lock();
        let profile = profiles
            .by_id
            .get_mut(id)
            .ok_or_else(|| PrintdeskError::NotFound(NOT_FOUND_MESSAGE.into()))?;

        profile.merge(input);

        info!(profile_id = %id, "profile updated");
        Ok(profile.clone())
    }

    /// Remove a profile.
    ///
    /// # Errors
    ///
    /// `ProtectedRecord` for the `default` profile, `NotFound` if `id` is
    /// not in the store.
    #[instrument(skip(self), fields(profile_id = %id))]
    pub fn delete(&self, id: &ProfileId) -> Result<()> {
        if id.is_default_profile() {
            return Err(PrintdeskError::ProtectedRecord(PROTECTED_MESSAGE.into()));
        }

        let mut profiles = self.lock();
        if profiles.by_id.remove(id).is_none() {
            return Err(PrintdeskError::NotFound(NOT_FOUND_MESSAGE.into()));
        }
        profiles.order.retain(|existing| existing != id);

        info!(profile_id = %id, "profile deleted");
        Ok(())
    }

    /// The fixed preset table.
    pub fn presets(&self) -> &BTreeMap<String, JobPreset> {
        &self.presets
    }

    /// Compute a preview for the given settings. Does not touch the store.
    pub fn preview(&self, input: &ProfileFields) -> PrintPreview {
        PrintPreview::from_fields(input)
    }
}
