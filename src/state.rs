//! The current setting lives outside this process, in a file written by a
//! separate handler. This module abstracts over where it comes from, so the
//! page can be rendered against anything that can produce a line of text.

use crate::metric::Metric;
use anyhow::Context;
use log::{error, trace, warn};
use std::{io, path::PathBuf};
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, AsyncReadExt, BufReader},
    sync::RwLock,
};

/// Somewhere the selected metric is stored. Implementations only hand back
/// raw text; interpreting it is left to [current_setting].
#[rocket::async_trait]
pub trait SettingSource: Send + Sync {
    /// Get a descriptive name for this source, for logging
    fn name(&self) -> String;

    /// Read the first line of stored content, including its line terminator
    /// if it had one. Return `None` if nothing is stored.
    async fn read_line(&self) -> anyhow::Result<Option<String>>;
}

/// Settings stored as the first line of a text file
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Most we'll read looking for the end of the first line. Identifiers
    /// are much shorter than this, so anything longer is garbage anyway.
    const MAX_LINE: u64 = 256;

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[rocket::async_trait]
impl SettingSource for FileSource {
    fn name(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn read_line(&self) -> anyhow::Result<Option<String>> {
        let file = match File::open(&self.path).await {
            Ok(file) => file,
            // The writer hasn't run yet, which just means nothing's selected
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(None)
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Error opening {}", self.path.display())
                })
            }
        };

        // Read bytes rather than a String so a truncated multi-byte char
        // can't fail the read
        let mut line = Vec::new();
        BufReader::new(file.take(Self::MAX_LINE))
            .read_until(b'\n', &mut line)
            .await
            .with_context(|| format!("Error reading {}", self.path.display()))?;
        if line.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&line).into_owned()))
        }
    }
}

/// Settings held in memory. Useful when there's no file to read from.
#[derive(Debug, Default)]
pub struct MemorySource {
    line: RwLock<Option<String>>,
}

impl MemorySource {
    pub fn new(line: Option<&str>) -> Self {
        Self {
            line: RwLock::new(line.map(String::from)),
        }
    }

    /// Replace the stored content, the way an external writer would
    pub async fn set(&self, line: Option<&str>) {
        *self.line.write().await = line.map(String::from);
    }
}

#[rocket::async_trait]
impl SettingSource for MemorySource {
    fn name(&self) -> String {
        "memory".into()
    }

    async fn read_line(&self) -> anyhow::Result<Option<String>> {
        let guard = self.line.read().await;
        // Only the first line counts, same as a file
        Ok(guard.as_deref().and_then(|content| {
            content.split_inclusive('\n').next().map(String::from)
        }))
    }
}

/// Interpret a stored line as a metric. Trailing line terminators and spaces
/// are ignored, so the writer may or may not end the line. Everything else
/// must match an identifier exactly.
pub fn parse_setting(line: &str) -> Option<Metric> {
    line.trim_end_matches(['\n', '\r', ' ']).parse().ok()
}

/// Load the currently selected metric. Any failure, whether the source can't
/// be read or holds garbage, is logged and treated as no selection.
pub async fn current_setting(source: &dyn SettingSource) -> Option<Metric> {
    let line = match source.read_line().await {
        Ok(Some(line)) => line,
        Ok(None) => {
            trace!("No setting stored in {}", source.name());
            return None;
        }
        Err(err) => {
            error!("Error loading setting from {}: {err:?}", source.name());
            return None;
        }
    };

    let setting = parse_setting(&line);
    if setting.is_none() {
        warn!(
            "Unrecognized setting {:?} in {}",
            line.trim_end(),
            source.name()
        );
    }
    setting
}
