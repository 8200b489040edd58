use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::export::{CardRegion, Download};

use super::PreviewFormat;

/// Destination for preview text or exported images.
#[derive(Debug, Clone)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }
}

/// Controls how the preview is printed.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: PreviewFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    pub fn new(format: PreviewFormat) -> Self {
        Self {
            format,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }

    pub fn add_destination(mut self, destination: OutputDestination) -> Self {
        self.destinations.push(destination);
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(PreviewFormat::Text)
    }
}

/// Serialize the card region and write it to every configured destination.
pub fn emit_preview(region: &CardRegion, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    let payload = serialize_region(region, options)?;
    for destination in &options.destinations {
        write_payload(destination, payload.as_bytes(), true).with_context(|| {
            match destination {
                OutputDestination::Stdout => "failed to write to stdout".to_string(),
                OutputDestination::File(path) => {
                    format!("failed to write to file {}", path.display())
                }
            }
        })?;
    }
    Ok(())
}

/// Offer a download: raw bytes for files, a data URI line for stdout.
pub fn write_download(download: &Download, destination: &OutputDestination) -> Result<()> {
    match destination {
        OutputDestination::Stdout => {
            let uri = download.blob.to_data_uri();
            write_payload(destination, uri.as_bytes(), true).context("failed to write to stdout")
        }
        OutputDestination::File(path) => {
            write_payload(destination, &download.blob.bytes, false)
                .with_context(|| format!("failed to write image to {}", path.display()))
        }
    }
}

fn serialize_region(region: &CardRegion, options: &OutputOptions) -> Result<String> {
    match options.format {
        PreviewFormat::Text => Ok(region.to_string()),
        PreviewFormat::Json => {
            if options.pretty {
                serde_json::to_string_pretty(region).context("failed to serialize JSON")
            } else {
                serde_json::to_string(region).context("failed to serialize JSON")
            }
        }
    }
}

fn write_payload(destination: &OutputDestination, payload: &[u8], newline: bool) -> Result<()> {
    match destination {
        OutputDestination::Stdout => write_stream(&mut io::stdout(), "stdout", payload, newline),
        OutputDestination::File(path) => {
            let mut file = File::create(path)?;
            write_stream(&mut file, &path.display().to_string(), payload, newline)
        }
    }
}

fn write_stream(writer: &mut impl Write, name: &str, payload: &[u8], newline: bool) -> Result<()> {
    writer
        .write_all(payload)
        .with_context(|| format!("failed to write to {name}"))?;
    if newline {
        writer
            .write_all(b"\n")
            .with_context(|| format!("failed to write to {name}"))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ImageBlob, ImageFormat};
    use crate::preview::PreviewEntry;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(prefix: &str) -> PathBuf {
        let filename = format!(
            "{prefix}-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        std::env::temp_dir().join(filename)
    }

    fn region() -> CardRegion {
        CardRegion {
            entries: vec![PreviewEntry {
                label: "Name".into(),
                text: "Ada".into(),
            }],
            footer: "Team Card".into(),
        }
    }

    #[test]
    fn emit_is_noop_without_destinations() {
        let options = OutputOptions::default().with_destinations(Vec::new());
        emit_preview(&region(), &options).unwrap();
    }

    #[test]
    fn writes_json_preview_to_file() {
        let path = temp_path("schemacard-preview");
        let options = OutputOptions::new(PreviewFormat::Json)
            .with_destinations(vec![OutputDestination::file(&path)]);
        emit_preview(&region(), &options).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Ada\""));
        assert!(contents.contains("\"footer\""));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn writes_download_bytes_verbatim() {
        let path = temp_path("schemacard-download");
        let download = Download {
            file_name: "my-profile-card.png".into(),
            blob: ImageBlob::new(ImageFormat::Png, vec![0x89, b'P', b'N', b'G']),
        };
        write_download(&download, &OutputDestination::file(&path)).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![0x89, b'P', b'N', b'G']);
        let _ = fs::remove_file(path);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_names_the_write() {
        let err = write_stream(&mut BrokenPipe, "stdout", b"Name: Ada", true).unwrap_err();
        assert_eq!(err.to_string(), "failed to write to stdout");
    }
}
