//! Cross-session user preferences.
//!
//! Only two things outlive an editing session: the chosen button-label
//! vocabulary and the user's saved color palette. Everything else is loaded
//! from the device on page mount and pushed back on save.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::buttons::LabelVocabulary;
use crate::theme::Rgb;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub button_labels: LabelVocabulary,
    pub saved_colors: Vec<Rgb>,
}

impl Preferences {
    /// Load preferences from `path`. A missing file yields the defaults; a
    /// present-but-malformed file is an error rather than silent data loss.
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no preferences at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read preferences from {}", path.display()))
            }
        };

        serde_json::from_slice(&bytes)
            .with_context(|| format!("malformed preferences file {}", path.display()))
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_vec_pretty(self)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("failed to write preferences to {}", path.display()))
    }
}
