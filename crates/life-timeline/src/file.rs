use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use life_core::Timeline;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// First bytes of every timeline file.
pub const MAGIC: [u8; 8] = *b"SICKLIFE";

/// Version written by this crate.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Header {
    magic: [u8; 8],
    version: u32,
}

/// Encode `timeline` into `writer`.
pub fn write_to<W: Write>(mut writer: W, timeline: &Timeline) -> TimelineResult<()> {
    let header = Header {
        magic: MAGIC,
        version: FORMAT_VERSION,
    };
    bincode::serialize_into(&mut writer, &header)?;
    bincode::serialize_into(&mut writer, timeline)?;
    writer.flush()?;
    Ok(())
}

/// Decode a timeline written by [`write_to`].
pub fn read_from<R: Read>(mut reader: R) -> TimelineResult<Timeline> {
    let header: Header = bincode::deserialize_from(&mut reader)?;
    if header.magic != MAGIC {
        return Err(TimelineError::BadMagic);
    }
    if header.version != FORMAT_VERSION {
        return Err(TimelineError::UnsupportedVersion(header.version));
    }
    Ok(bincode::deserialize_from(&mut reader)?)
}

/// Write `timeline` to `path`.
///
/// The data goes to a sibling temporary file first and is renamed into
/// place, so a crash never leaves a truncated timeline behind.
pub fn save(path: impl AsRef<Path>, timeline: &Timeline) -> TimelineResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let written = write_file(&tmp, timeline)
        .and_then(|()| fs::rename(&tmp, path).map_err(TimelineError::from));
    if let Err(err) = written {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }

    tracing::debug!(
        "Saved {} generations to {}",
        timeline.len(),
        path.display()
    );
    Ok(())
}

fn write_file(path: &Path, timeline: &Timeline) -> TimelineResult<()> {
    let file = File::create(path)?;
    write_to(BufWriter::new(file), timeline)
}

/// Read a timeline from `path`.
pub fn load(path: impl AsRef<Path>) -> TimelineResult<Timeline> {
    let path = path.as_ref();
    let timeline = read_from(BufReader::new(File::open(path)?))?;

    tracing::debug!(
        "Loaded {} generations from {}",
        timeline.len(),
        path.display()
    );
    Ok(timeline)
}
