//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::{ia_err, OrchestrateError};
use std::path::PathBuf;

/// Expand a leading `~/` (or `~\`) to the current user's home directory.
pub(crate) fn expand_user_home(file_path: &str) -> Result<String, OrchestrateError> {
    if !(file_path.starts_with("~/") || file_path.starts_with("~\\")) {
        return Ok(file_path.to_string());
    }
    match dirs::home_dir() {
        Some(home_dir) => {
            let full_path = home_dir.join(PathBuf::from(correct_path(&file_path[2..])));
            Ok(full_path.display().to_string())
        }
        None => ia_err!("cannot expand '{}': no home directory", file_path),
    }
}

// Use the platform separator
fn correct_path(file_path: &str) -> String {
    if cfg!(target_os = "windows") {
        file_path.replace('/', "\\")
    } else {
        file_path.to_string()
    }
}
