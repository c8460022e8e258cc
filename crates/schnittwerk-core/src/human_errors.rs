// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for embedding UIs.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity levels drive presentation (icon, colour, retry button).

use crate::error::SchnittwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Storage blip, transient I/O — retrying may succeed.
    Transient,
    /// User must do something (free up space, pick a different file).
    ActionRequired,
    /// Cannot be fixed by retrying or user action — damaged file, bad input.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether the caller should offer an automatic retry.
    pub retriable: bool,
    /// Severity level.
    pub severity: Severity,
}

/// Convert a `SchnittwerkError` into a `HumanError`.
pub fn humanize_error(err: &SchnittwerkError) -> HumanError {
    match err {
        // -- Editor errors --
        SchnittwerkError::Decode(_) => HumanError {
            message: "There's a problem with this image.".into(),
            suggestion: "The image may be damaged or in an unusual format. Try saving it as a JPEG or PNG first.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        SchnittwerkError::Encode(_) => HumanError {
            message: "The edited image couldn't be saved in that format.".into(),
            suggestion: "Try a different output format, such as PNG.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        SchnittwerkError::UnsupportedFormat(detail) => HumanError {
            message: "This type of image isn't supported.".into(),
            suggestion: format!("Try converting the image to JPEG or PNG first. (Format: {detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        SchnittwerkError::InvalidCrop(_) => HumanError {
            message: "The selected area is outside the picture.".into(),
            suggestion: "Adjust the selection so it covers part of the image, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        SchnittwerkError::InvalidQuality(_) => HumanError {
            message: "The quality setting isn't valid.".into(),
            suggestion: "Quality must be between 0 and 1. Try the default of 0.9.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        SchnittwerkError::InvalidSource(_) => HumanError {
            message: "That image couldn't be opened.".into(),
            suggestion: "Check the file location and try choosing the image again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Staging errors --
        SchnittwerkError::DirectoryCreation { .. } => HumanError {
            message: "A working folder couldn't be created.".into(),
            suggestion: "Check that the app is allowed to write to its cache folder, and that storage isn't full.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        SchnittwerkError::StagedWrite { .. } => HumanError {
            message: "The edited image couldn't be written to storage.".into(),
            suggestion: "Your device's storage may be full. Free up some space, then try again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        // -- Storage --
        SchnittwerkError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to read that file.".into(),
                    suggestion: "Check the file permissions, or try copying the file to a different location first.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        SchnittwerkError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}
