//! store/save — persist the mapping back to the manifest file.
//!
//! Формат: pretty JSON (config.indent пробелов, 0 => compact) + завершающий '\n'.
//! - save(): синхронно, ошибки сразу вызывающему;
//! - save_with(cb): снимок сериализуется в текущем потоке, запись идёт в
//!   фоновом потоке, cb получает результат;
//! - atomic_save: запись в <path>.tmp + rename (иначе — truncate + write).

use std::fs;
use std::io;
use std::path::Path;
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};
use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::util::{ensure_parent_dir, tmp_path, write_file, write_file_atomic};
use crate::value::{Map, ObjectRef};

use super::ManifestStore;

impl ManifestStore {
    /// Serialized manifest text exactly as save() would write it.
    pub fn to_json_string(&self) -> Result<String> {
        let bytes = render(self.data.data(), self.config.indent)
            .map_err(|e| StoreError::write(&self.path, e))?;
        String::from_utf8(bytes).map_err(|e| StoreError::write(&self.path, e))
    }

    pub fn save(&self) -> Result<()> {
        let bytes = render(self.data.data(), self.config.indent)
            .map_err(|e| StoreError::write(&self.path, e))?;
        write_manifest(&self.path, &bytes, self.config.atomic_save)
    }

    /// Background save; `done` is called exactly once with the outcome.
    pub fn save_with<F>(&self, done: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let path = self.path.clone();
        let atomic = self.config.atomic_save;
        let rendered = render(self.data.data(), self.config.indent)
            .map_err(|e| StoreError::write(&self.path, e));
        thread::spawn(move || {
            let res = rendered.and_then(|bytes| write_manifest(&path, &bytes, atomic));
            done(res);
        })
    }

    /// Remove the manifest file. In-memory data stays as is.
    /// Returns false if there was nothing to remove.
    pub fn unlink(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("removed {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::write(&self.path, e)),
        }
    }
}

fn render(data: &Map, indent: usize) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if indent == 0 {
        serde_json::to_writer(&mut buf, &ObjectRef(data))?;
    } else {
        let pad = " ".repeat(indent);
        let fmt = serde_json::ser::PrettyFormatter::with_indent(pad.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
        ObjectRef(data).serialize(&mut ser)?;
    }
    buf.push(b'\n');
    Ok(buf)
}

fn write_manifest(path: &Path, bytes: &[u8], atomic: bool) -> Result<()> {
    ensure_parent_dir(path).map_err(|e| StoreError::write(path, format!("create dir: {e}")))?;
    let res = if atomic {
        write_file_atomic(path, bytes)
    } else {
        write_file(path, bytes)
    };
    if let Err(e) = res {
        if atomic {
            let tmp = tmp_path(path);
            if tmp.exists() {
                warn!("leftover temp file {}", tmp.display());
            }
        }
        return Err(StoreError::write(path, e));
    }
    debug!("wrote {} B (atomic={})", bytes.len(), atomic);
    info!("saved {}", path.display());
    Ok(())
}
