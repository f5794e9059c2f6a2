// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::PathBuf,
          sync::atomic::{AtomicUsize, Ordering}};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A fresh, not yet existing, log file path under the system temp dir.
pub fn temp_log_path(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "rawed_tui_log_{pid}_{n}",
        pid = std::process::id(),
        n = COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(format!("{prefix}.log"))
}
