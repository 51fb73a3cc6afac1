use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    error::StoreError,
    problem::{
        instance_store::{InstanceStore, assert_in_range},
        item::{Item, ItemIdx},
        knapsack_instance::KnapsackInstance,
    },
};

pub const VALUES_FILENAME: &str = "values.txt";
pub const WEIGHTS_FILENAME: &str = "weights.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMode {
    /// Every lookup re-reads the file up to the requested line.
    #[default]
    Uncached,
    /// Both files are parsed once when the store is opened.
    Cached,
}

/// Item catalogue persisted as two line-oriented files in one directory,
/// `values.txt` and `weights.txt`. Line `k` of each file holds item `k`.
#[derive(Debug)]
pub struct LineFileStore {
    values_path: PathBuf,
    weights_path: PathBuf,
    len: usize,
    cache: Option<KnapsackInstance>,
}

impl LineFileStore {
    pub fn open<P: AsRef<Path>>(dir: P, mode: StoreMode) -> Result<Self, StoreError> {
        let values_path = dir.as_ref().join(VALUES_FILENAME);
        let weights_path = dir.as_ref().join(WEIGHTS_FILENAME);

        let (len, cache) = match mode {
            StoreMode::Uncached => {
                let values = count_records(&values_path)?;
                let weights = count_records(&weights_path)?;
                ensure_same_len(values, weights)?;
                (values, None)
            }
            StoreMode::Cached => {
                let values = read_records(&values_path)?;
                let weights = read_records(&weights_path)?;
                ensure_same_len(values.len(), weights.len())?;

                let items = values
                    .into_iter()
                    .zip(weights)
                    .map(|(value, weight)| Item::new(value, weight))
                    .collect::<Vec<_>>();

                // Records are already checked to be positive by `parse_record`.
                let instance = KnapsackInstance::from_parsed_items(items);

                (instance.len(), Some(instance))
            }
        };

        info!(
            "Opened store {:?} with {} items ({:?})",
            dir.as_ref(),
            len,
            mode
        );

        Ok(LineFileStore {
            values_path,
            weights_path,
            len,
            cache,
        })
    }

    /// Persists `instance` into `dir`, creating the directory if needed.
    pub fn write<P: AsRef<Path>>(dir: P, instance: &KnapsackInstance) -> Result<(), StoreError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        write_records(&dir.join(VALUES_FILENAME), instance.values())?;
        write_records(&dir.join(WEIGHTS_FILENAME), instance.weights())?;

        debug!("Wrote {} items to {:?}", instance.len(), dir);

        Ok(())
    }

    pub fn mode(&self) -> StoreMode {
        if self.cache.is_some() {
            StoreMode::Cached
        } else {
            StoreMode::Uncached
        }
    }

    pub fn values_path(&self) -> &Path {
        &self.values_path
    }

    pub fn weights_path(&self) -> &Path {
        &self.weights_path
    }
}

impl InstanceStore for LineFileStore {
    fn len(&self) -> usize {
        self.len
    }

    fn value_of(&self, index: ItemIdx) -> Result<u64, StoreError> {
        assert_in_range(index, self.len);
        match &self.cache {
            Some(instance) => instance.value_of(index),
            None => read_record(&self.values_path, index.get()),
        }
    }

    fn weight_of(&self, index: ItemIdx) -> Result<u64, StoreError> {
        assert_in_range(index, self.len);
        match &self.cache {
            Some(instance) => instance.weight_of(index),
            None => read_record(&self.weights_path, index.get()),
        }
    }
}

fn ensure_same_len(values: usize, weights: usize) -> Result<(), StoreError> {
    if values != weights {
        return Err(StoreError::LengthMismatch { values, weights });
    }

    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn open_reader(path: &Path) -> Result<BufReader<File>, StoreError> {
    File::open(path).map(BufReader::new).map_err(io_error(path))
}

fn parse_record(path: &Path, line_index: usize, content: &str) -> Result<u64, StoreError> {
    match content.trim().parse::<u64>() {
        Ok(record) if record > 0 => Ok(record),
        _ => Err(StoreError::Malformed {
            path: path.to_path_buf(),
            line: line_index + 1,
            content: content.to_string(),
        }),
    }
}

fn count_records(path: &Path) -> Result<usize, StoreError> {
    let mut count = 0;
    for line in open_reader(path)?.lines() {
        line.map_err(io_error(path))?;
        count += 1;
    }

    Ok(count)
}

fn read_records(path: &Path) -> Result<Vec<u64>, StoreError> {
    open_reader(path)?
        .lines()
        .enumerate()
        .map(|(line_index, line)| {
            let content = line.map_err(io_error(path))?;
            parse_record(path, line_index, &content)
        })
        .collect()
}

fn read_record(path: &Path, line_index: usize) -> Result<u64, StoreError> {
    match open_reader(path)?.lines().nth(line_index) {
        Some(Ok(content)) => parse_record(path, line_index, &content),
        Some(Err(source)) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => Err(StoreError::MissingRecord {
            path: path.to_path_buf(),
            line: line_index + 1,
        }),
    }
}

fn write_records(path: &Path, records: impl Iterator<Item = u64>) -> Result<(), StoreError> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writeln!(writer, "{record}").map_err(io_error(path))?;
    }

    writer.flush().map_err(io_error(path))
}
