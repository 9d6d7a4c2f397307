use super::{parse_contents, StoreLoad, TodoStore};
use crate::error::{Result, TodoError};
use crate::model::Todo;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TodoError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "todos.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TodoStore for FileStore {
    fn load(&self) -> Result<StoreLoad> {
        self.ensure_parent_dir()?;

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no todo store at {}", self.path.display());
                return Ok(StoreLoad::Empty);
            }
            // Present but not UTF-8 is a corrupt store, not an I/O fault
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Ok(StoreLoad::Corrupt(e.to_string()));
            }
            Err(e) => return Err(TodoError::Io(e)),
        };

        Ok(parse_contents(&raw))
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(todos).map_err(TodoError::Serialization)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(TodoError::Io)?;
        fs::rename(&tmp, &self.path).map_err(TodoError::Io)?;

        debug!("wrote {} todos to {}", todos.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
