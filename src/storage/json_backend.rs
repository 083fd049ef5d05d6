use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::BiddingRecord;

use super::Result;

const DEFAULT_DIR_NAME: &str = "licit_pro";
const DB_FILE: &str = "licit_pro_db.json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence: the entire record collection lives in
/// one pretty-printed document, written atomically via a staged tmp file.
#[derive(Clone)]
pub struct JsonStorage {
    db_file: PathBuf,
}

impl JsonStorage {
    /// Opens storage under `root`, or the resolved default data directory
    /// when `root` is `None`.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        fs::create_dir_all(&base)?;
        Ok(Self {
            db_file: base.join(DB_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_file
    }
}

impl super::StorageBackend for JsonStorage {
    fn save(&self, records: &[BiddingRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        let tmp = tmp_path(&self.db_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.db_file)?;
        Ok(())
    }

    /// A missing database file is an empty collection; unreadable or
    /// malformed content is an error for the caller to downgrade.
    fn load(&self) -> Result<Vec<BiddingRecord>> {
        if !self.db_file.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.db_file)?;
        let records: Vec<BiddingRecord> = serde_json::from_str(&data)?;
        Ok(records)
    }
}

/// Application data directory, defaulting to the platform data dir and
/// overridable through `LICIT_PRO_HOME`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("LICIT_PRO_HOME") {
        return PathBuf::from(custom);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
