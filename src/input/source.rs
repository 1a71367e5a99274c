use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

use flate2::read::GzDecoder;
use memmap2::Mmap;

use crate::input::InputError;

/// Raw dataset bytes: mapped for plain files, decoded for `.gz`.
pub enum DatasetBytes {
    Mapped(Mmap),
    Decoded(Vec<u8>),
}

impl Deref for DatasetBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            DatasetBytes::Mapped(mmap) => &mmap[..],
            DatasetBytes::Decoded(buf) => buf,
        }
    }
}

pub fn read_dataset_bytes(path: &Path) -> Result<DatasetBytes, InputError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Err(InputError::InvalidInput(format!(
            "dataset file is empty: {}",
            path.display()
        )));
    }
    if path.extension().is_some_and(|ext| ext == "gz") {
        let mut decoder = GzDecoder::new(file);
        let mut buf = Vec::new();
        decoder.read_to_end(&mut buf).map_err(|e| {
            InputError::InvalidInput(format!("failed to decompress {}: {e}", path.display()))
        })?;
        Ok(DatasetBytes::Decoded(buf))
    } else {
        // File is opened read-only and only read while the map is alive.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(DatasetBytes::Mapped(mmap))
    }
}
