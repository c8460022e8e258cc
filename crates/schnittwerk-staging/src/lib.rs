// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Schnittwerk — File staging for generated images.
//
// Provisioning of cache-directory paths, generation of unique file names, and
// atomic whole-blob writes. The editor crate stages every cropped image
// through this layer; callers delete staged files when they are done with
// them, and `StagingArea::clean` reclaims anything left behind by a crash.

pub mod area;
pub mod paths;
pub mod writer;

pub use area::StagingArea;
pub use paths::{cache_dir, ensure_dir_exists, generate_path};
pub use writer::write_image;
