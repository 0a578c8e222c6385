use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_all_events, insert_event, load_events};
use crate::db::settings::{delete_all_settings, list_settings, upsert_setting};
use crate::errors::{AppError, AppResult};
use crate::models::backup::BackupDocument;
use crate::models::event::Event;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Row counts written by a restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreStats {
    pub settings: usize,
    pub events: usize,
}

pub struct BackupLogic;

impl BackupLogic {
    /// Snapshot of every setting and event.
    pub fn snapshot(pool: &DbPool) -> AppResult<BackupDocument> {
        let settings = list_settings(&pool.conn)?;
        let events = load_events(&pool.conn)?;
        Ok(BackupDocument::new(&settings, &events))
    }

    /// Write the backup document to `dest` and return the final path.
    ///
    /// With `compress` the JSON is stored inside `<dest>.zip`.
    pub fn backup(pool: &DbPool, dest: &Path, compress: bool) -> AppResult<PathBuf> {
        let doc = Self::snapshot(pool)?;
        let json = serde_json::to_string_pretty(&doc)?;

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            write_zip(dest, &json)?
        } else {
            fs::write(dest, json)?;
            dest.to_path_buf()
        };

        audit(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            &format!(
                "{} settings, {} events{}",
                doc.settings.len(),
                doc.events.len(),
                if compress { " (compressed)" } else { "" }
            ),
        );

        Ok(final_path)
    }

    /// Read a backup document from a JSON file or a zip produced by `backup --compress`.
    pub fn read_document(path: &Path) -> AppResult<BackupDocument> {
        let bytes = fs::read(path)?;

        if bytes.starts_with(ZIP_MAGIC) {
            let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
            if archive.is_empty() {
                return Err(AppError::Other(format!(
                    "archive {} contains no backup document",
                    path.display()
                )));
            }
            let mut entry = archive.by_index(0)?;
            let mut json = String::new();
            entry.read_to_string(&mut json)?;
            return Ok(serde_json::from_str(&json)?);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Replace all settings and events with the content of `path`.
    ///
    /// The document is parsed before anything is touched, and the
    /// replacement runs in one transaction: on failure the store is unchanged.
    pub fn restore(pool: &mut DbPool, path: &Path) -> AppResult<RestoreStats> {
        let doc = Self::read_document(path)?;
        let stats = Self::restore_document(pool, &doc)?;

        audit(
            &pool.conn,
            "restore",
            &path.to_string_lossy(),
            &format!("{} settings, {} events", stats.settings, stats.events),
        );

        Ok(stats)
    }

    pub fn restore_document(pool: &mut DbPool, doc: &BackupDocument) -> AppResult<RestoreStats> {
        let tx = pool.conn.transaction()?;

        delete_all_events(&tx)?;
        delete_all_settings(&tx)?;

        for e in &doc.events {
            insert_event(&tx, &Event::from(e))?;
        }
        for s in &doc.settings {
            upsert_setting(&tx, &s.key, &s.value)?;
        }

        tx.commit()?;

        Ok(RestoreStats {
            settings: doc.settings.len(),
            events: doc.events.len(),
        })
    }
}

/// Store `json` as the single entry of `<dest>.zip`.
fn write_zip(dest: &Path, json: &str) -> AppResult<PathBuf> {
    let zip_path = dest.with_extension("zip");
    let entry_name = dest
        .with_extension("json")
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "timesheet.json".to_string());

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)?;
    zip.write_all(json.as_bytes())?;
    zip.finish()?;

    Ok(zip_path)
}
