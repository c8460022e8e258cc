// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Editor configuration.

use serde::{Deserialize, Serialize};

/// Settings for the crop engine and its staging area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Subdirectory of the platform cache root where staged images land.
    pub cache_subdir: String,
    /// Filename prefix for staged images. Cleanup only touches files that
    /// carry this prefix.
    pub staging_prefix: String,
    /// JPEG quality (0.0–1.0) used when the caller does not specify one.
    pub default_quality: f32,
    /// Delete leftover staged files when the editor is constructed. Leftovers
    /// accumulate when a previous run crashed before its caller could delete
    /// the cropped images it requested.
    pub clean_on_start: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cache_subdir: "schnittwerk".into(),
            staging_prefix: "schnittwerk_cropped_".into(),
            default_quality: 0.9,
            clean_on_start: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_json() {
        let config = EditorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EditorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cache_subdir, config.cache_subdir);
        assert_eq!(back.staging_prefix, config.staging_prefix);
        assert!(back.clean_on_start);
    }
}
