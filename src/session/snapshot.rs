use super::options::{CompressionMode, SketchOptions};
use crate::draw::Frame;
use anyhow::{Context, Result};
use chrono::Utc;
use flate2::{bufread::GzDecoder, write::GzEncoder, Compression};
use fs2::FileExt;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const CURRENT_VERSION: u32 = 1;

/// On-disk payload for a saved sketch.
#[derive(Debug, Serialize, Deserialize)]
struct SketchFile {
    version: u32,
    last_modified: String,
    #[serde(default)]
    frame: Frame,
}

/// Persist the frame's display list to disk according to the configured
/// options.
///
/// An empty frame removes any existing sketch file instead of writing an
/// empty payload. Writes are atomic (temp file + rename) and guarded by an
/// exclusive lock so concurrent export invocations cannot interleave.
pub fn save_sketch(frame: &Frame, options: &SketchOptions) -> Result<()> {
    if !options.enabled {
        debug!("Sketch persistence disabled; skipping save");
        return Ok(());
    }

    fs::create_dir_all(&options.base_dir).with_context(|| {
        format!(
            "failed to create sketch directory {}",
            options.base_dir.display()
        )
    })?;

    let lock_path = options.lock_file_path();
    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(&lock_path)
        .with_context(|| format!("failed to open sketch lock file {}", lock_path.display()))?;
    lock_file
        .lock_exclusive()
        .with_context(|| format!("failed to lock sketch file {}", lock_path.display()))?;

    let result = save_sketch_inner(frame, options);

    lock_file.unlock().unwrap_or_else(|err| {
        warn!(
            "failed to unlock sketch file {}: {}",
            lock_path.display(),
            err
        )
    });

    result
}

fn save_sketch_inner(frame: &Frame, options: &SketchOptions) -> Result<()> {
    let sketch_path = options.sketch_file_path();
    let backup_path = options.backup_file_path();

    if frame.is_empty() {
        if sketch_path.exists() {
            debug!(
                "Removing sketch file {} because the sketch is empty",
                sketch_path.display()
            );
            fs::remove_file(&sketch_path).with_context(|| {
                format!("failed to remove empty sketch file {}", sketch_path.display())
            })?;
        }
        return Ok(());
    }

    let payload = SketchFile {
        version: CURRENT_VERSION,
        last_modified: Utc::now().to_rfc3339(),
        frame: frame.clone(),
    };

    let mut json_bytes =
        serde_json::to_vec_pretty(&payload).context("failed to serialise sketch payload")?;

    if json_bytes.len() as u64 > options.max_file_size_bytes {
        warn!(
            "Sketch data size {} bytes exceeds the configured limit of {} bytes; skipping save",
            json_bytes.len(),
            options.max_file_size_bytes
        );
        return Ok(());
    }

    let should_compress = match options.compression {
        CompressionMode::Off => false,
        CompressionMode::On => true,
        CompressionMode::Auto => (json_bytes.len() as u64) >= options.auto_compress_threshold_bytes,
    };

    if should_compress {
        json_bytes = compress_bytes(&json_bytes)?;
    }

    let tmp_path = temp_path(&sketch_path);
    {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .with_context(|| {
                format!("failed to open temporary sketch file {}", tmp_path.display())
            })?;
        tmp_file
            .write_all(&json_bytes)
            .context("failed to write sketch payload")?;
        tmp_file
            .sync_all()
            .context("failed to sync temporary sketch file")?;
    }

    if sketch_path.exists() {
        if options.backup_retention > 0 {
            if backup_path.exists() {
                fs::remove_file(&backup_path).ok();
            }
            fs::rename(&sketch_path, &backup_path).with_context(|| {
                format!(
                    "failed to rotate previous sketch file {} -> {}",
                    sketch_path.display(),
                    backup_path.display()
                )
            })?;
        } else {
            fs::remove_file(&sketch_path).ok();
        }
    }

    fs::rename(&tmp_path, &sketch_path).with_context(|| {
        format!(
            "failed to move temporary sketch file {} -> {}",
            tmp_path.display(),
            sketch_path.display()
        )
    })?;

    info!(
        "Sketch saved to {} ({} bytes, compression={})",
        sketch_path.display(),
        json_bytes.len(),
        should_compress
    );

    Ok(())
}

/// Attempt to load the previously saved sketch from the configured location.
///
/// Returns `Ok(None)` when persistence is disabled or no file exists.
pub fn load_sketch(options: &SketchOptions) -> Result<Option<Frame>> {
    if !options.enabled {
        debug!("Sketch persistence disabled; skipping load");
        return Ok(None);
    }

    let sketch_path = options.sketch_file_path();
    if !sketch_path.exists() {
        debug!(
            "No sketch file present at {}, skipping load",
            sketch_path.display()
        );
        return Ok(None);
    }

    let lock_path = options.lock_file_path();
    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(&lock_path)
        .with_context(|| format!("failed to open sketch lock file {}", lock_path.display()))?;
    lock_file
        .lock_shared()
        .with_context(|| format!("failed to acquire shared lock {}", lock_path.display()))?;

    let result = load_sketch_from(&sketch_path, options);

    lock_file.unlock().unwrap_or_else(|err| {
        warn!(
            "failed to unlock sketch file {}: {}",
            lock_path.display(),
            err
        )
    });

    result
}

/// Load a sketch from an explicit path, honoring the size and mark limits
/// but not the enabled flag (an explicit path is an explicit request).
pub fn load_sketch_from(sketch_path: &Path, options: &SketchOptions) -> Result<Option<Frame>> {
    if !sketch_path.exists() {
        return Ok(None);
    }

    let metadata = fs::metadata(sketch_path)
        .with_context(|| format!("failed to stat sketch file {}", sketch_path.display()))?;
    if metadata.len() > options.max_file_size_bytes {
        warn!(
            "Sketch file {} is {} bytes which exceeds the configured limit ({} bytes); refusing to load",
            sketch_path.display(),
            metadata.len(),
            options.max_file_size_bytes
        );
        return Ok(None);
    }

    let mut file_bytes = Vec::new();
    {
        let mut file = File::open(sketch_path)
            .with_context(|| format!("failed to open sketch file {}", sketch_path.display()))?;
        file.read_to_end(&mut file_bytes)
            .context("failed to read sketch file")?;
    }

    let decompressed = if is_gzip(&file_bytes) {
        let mut decoder = GzDecoder::new(&file_bytes[..]);
        let mut out = Vec::new();
        decoder
            .read_to_end(&mut out)
            .context("failed to decompress sketch file")?;
        out
    } else {
        file_bytes
    };

    let sketch_file: SketchFile =
        serde_json::from_slice(&decompressed).context("failed to parse sketch json")?;

    if sketch_file.version > CURRENT_VERSION {
        warn!(
            "Sketch file {} has version {} which is newer than supported version {}; refusing to load",
            sketch_path.display(),
            sketch_file.version,
            CURRENT_VERSION
        );
        return Ok(None);
    }

    let mut frame = sketch_file.frame;
    if options.max_marks > 0 && frame.len() > options.max_marks {
        warn!(
            "Sketch contains {} marks which exceeds the limit of {}; truncating",
            frame.len(),
            options.max_marks
        );
        frame.truncate_marks(options.max_marks);
    }

    if frame.is_empty() {
        debug!(
            "Loaded sketch file at {} but it contained no marks",
            sketch_path.display()
        );
        return Ok(None);
    }

    Ok(Some(frame))
}

fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .context("failed to compress sketch payload")?;
    encoder
        .finish()
        .context("failed to finalise compressed sketch payload")
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() > 2 && bytes[0] == 0x1f && bytes[1] == 0x8b
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("json.tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("json.tmp{}", counter));
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use tempfile::TempDir;

    fn frame_with_strokes(count: usize) -> Frame {
        let mut frame = Frame::new();
        for i in 0..count {
            let handle = frame.begin_stroke(i as i32, 0, 2.0, BLACK);
            frame.extend_stroke(handle, i as i32 + 10, 10);
            frame.end_stroke(handle);
        }
        frame
    }

    #[test]
    fn save_load_round_trips_the_display_list() {
        let temp = TempDir::new().unwrap();
        let options = SketchOptions::new(temp.path().to_path_buf());

        let mut frame = frame_with_strokes(2);
        frame.place_sticker("★", 50, 50, 30.0);

        save_sketch(&frame, &options).unwrap();
        let loaded = load_sketch(&options).unwrap().expect("sketch present");

        assert_eq!(loaded.marks(), frame.marks());
        // History is transient: a restored sketch starts clean.
        assert_eq!(loaded.redo_len(), 0);
    }

    #[test]
    fn empty_frame_removes_the_sketch_file() {
        let temp = TempDir::new().unwrap();
        let options = SketchOptions::new(temp.path().to_path_buf());

        save_sketch(&frame_with_strokes(1), &options).unwrap();
        assert!(options.sketch_file_path().exists());

        save_sketch(&Frame::new(), &options).unwrap();
        assert!(!options.sketch_file_path().exists());
        assert!(load_sketch(&options).unwrap().is_none());
    }

    #[test]
    fn forced_compression_writes_gzip_and_loads_back() {
        let temp = TempDir::new().unwrap();
        let mut options = SketchOptions::new(temp.path().to_path_buf());
        options.compression = CompressionMode::On;

        let frame = frame_with_strokes(3);
        save_sketch(&frame, &options).unwrap();

        let raw = fs::read(options.sketch_file_path()).unwrap();
        assert!(is_gzip(&raw));

        let loaded = load_sketch(&options).unwrap().expect("sketch present");
        assert_eq!(loaded.len(), 3);
    }

    #[test]
    fn mark_limit_truncates_on_load() {
        let temp = TempDir::new().unwrap();
        let mut options = SketchOptions::new(temp.path().to_path_buf());
        save_sketch(&frame_with_strokes(5), &options).unwrap();

        options.max_marks = 2;
        let loaded = load_sketch(&options).unwrap().expect("sketch present");
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn previous_sketch_is_rotated_to_backup() {
        let temp = TempDir::new().unwrap();
        let options = SketchOptions::new(temp.path().to_path_buf());

        save_sketch(&frame_with_strokes(1), &options).unwrap();
        save_sketch(&frame_with_strokes(2), &options).unwrap();

        assert!(options.backup_file_path().exists());
        let loaded = load_sketch(&options).unwrap().expect("sketch present");
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn disabled_persistence_skips_io() {
        let temp = TempDir::new().unwrap();
        let mut options = SketchOptions::new(temp.path().to_path_buf());
        options.enabled = false;

        save_sketch(&frame_with_strokes(1), &options).unwrap();
        assert!(!options.sketch_file_path().exists());
        assert!(load_sketch(&options).unwrap().is_none());
    }

    #[test]
    fn explicit_path_load_ignores_the_enabled_flag() {
        let temp = TempDir::new().unwrap();
        let options = SketchOptions::new(temp.path().to_path_buf());
        save_sketch(&frame_with_strokes(1), &options).unwrap();

        let mut disabled = options.clone();
        disabled.enabled = false;
        let loaded = load_sketch_from(&options.sketch_file_path(), &disabled).unwrap();
        assert!(loaded.is_some());
    }
}
