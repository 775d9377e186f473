use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dzongkha_core::{CardStore, CoreError, Flashcard, NewFlashcard};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tokio::task;
use tracing::debug;

pub mod paths;

const FILE_VERSION: u32 = 1;

#[derive(Clone, Serialize, Deserialize)]
struct FileImage {
    version: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    cards: Vec<Flashcard>,
}

impl FileImage {
    fn empty() -> Self {
        let now = Utc::now();
        Self {
            version: FILE_VERSION,
            created_at: now,
            updated_at: now,
            cards: Vec::new(),
        }
    }
}

pub struct JsonStore {
    path: PathBuf,
    backups_dir: PathBuf,
    max_backups: usize,
    state: RwLock<FileImage>,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub async fn open_default() -> Result<Self, CoreError> {
        let (file, backups) = paths::default_store_file();
        Self::open_with(file, backups, 10).await
    }

    /// Opens `path`, keeping backups in a `backups` directory next to it.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let backups = path
            .parent()
            .map(|p| p.join("backups"))
            .unwrap_or_else(|| PathBuf::from("backups"));
        Self::open_with(path, backups, 10).await
    }

    pub async fn open_with(
        path: PathBuf,
        backups_dir: PathBuf,
        max_backups: usize,
    ) -> Result<Self, CoreError> {
        ensure_parent_dirs(&path)?;
        ensure_dir(&backups_dir)?;
        let image = load_or_init(&path).await?;
        debug!(path = %path.display(), cards = image.cards.len(), "opened json store");
        Ok(Self {
            path,
            backups_dir,
            max_backups: max_backups.max(1),
            state: RwLock::new(image),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn save(&self, snapshot: FileImage) -> Result<(), CoreError> {
        let path = self.path.clone();
        let backups = self.backups_dir.clone();
        let keep = self.max_backups;

        task::spawn_blocking(move || write_with_backup(&path, &backups, keep, &snapshot))
            .await
            .map_err(|_| CoreError::StoreUnavailable("io"))?
            .map_err(|_| CoreError::StoreUnavailable("io"))?;
        Ok(())
    }
}

fn ensure_parent_dirs(path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<(), CoreError> {
    fs::create_dir_all(path).map_err(|_| CoreError::StoreUnavailable("io"))
}

async fn load_or_init(path: &Path) -> Result<FileImage, CoreError> {
    if path.exists() {
        let p = path.to_path_buf();
        let img = task::spawn_blocking(move || {
            let buf = fs::read_to_string(&p)?;
            let v = serde_json::from_str::<FileImage>(&buf)?;
            Ok::<FileImage, std::io::Error>(v)
        })
        .await
        .map_err(|_| CoreError::StoreUnavailable("io"))?
        .map_err(|_| CoreError::StoreUnavailable("corrupt json store"))?;
        if img.version != FILE_VERSION {
            return Err(CoreError::Invalid("unsupported json store version"));
        }
        Ok(img)
    } else {
        let img = FileImage::empty();
        write_atomic(path, &encode(&img)?).map_err(|_| CoreError::StoreUnavailable("io"))?;
        Ok(img)
    }
}

fn encode(img: &FileImage) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec_pretty(img).map_err(|_| CoreError::Invalid("serialize"))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn write_with_backup(
    path: &Path,
    backups_dir: &Path,
    max_backups: usize,
    img: &FileImage,
) -> Result<(), std::io::Error> {
    let json = serde_json::to_vec_pretty(img)?;
    fs::create_dir_all(backups_dir)?;
    write_atomic(path, &json)?;

    // Millisecond stamp: two reseeds in the same second must not overwrite each other.
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S%3f");
    let backup_path = backups_dir.join(format!("flashcards-{ts}.json"));
    write_atomic(&backup_path, &json)?;

    rotate_backups(backups_dir, max_backups)
}

fn rotate_backups(dir: &Path, keep: usize) -> Result<(), std::io::Error> {
    let mut entries: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    entries.sort_by_key(|e| e.file_name());
    if entries.len() > keep {
        for e in &entries[0..entries.len() - keep] {
            let _ = fs::remove_file(e.path());
        }
    }
    Ok(())
}

#[async_trait]
impl CardStore for JsonStore {
    async fn list_cards(&self) -> Result<Vec<Flashcard>, CoreError> {
        Ok(self.state.read().cards.clone())
    }

    async fn replace_all(&self, cards: &[NewFlashcard]) -> Result<Vec<Flashcard>, CoreError> {
        let fresh: Vec<Flashcard> = cards.iter().map(Flashcard::from_new).collect();
        let _writer = self.write_lock.lock().await;
        let mut snapshot = self.state.read().clone();
        snapshot.cards = fresh.clone();
        snapshot.updated_at = Utc::now();
        // Memory only follows once the file is on disk.
        self.save(snapshot.clone()).await?;
        *self.state.write() = snapshot;
        Ok(fresh)
    }
}
