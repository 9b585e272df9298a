//! Append-only JSONL writer for the audit trail.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::AuditEntry;

/// Appends audit entries to `<dir>/orders/<date>.jsonl`.
pub struct AuditLogWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl AuditLogWriter {
    /// Open (or create) today's audit file under `logs_dir`.
    pub fn new(logs_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let orders_dir = logs_dir.as_ref().join("orders");
        fs::create_dir_all(&orders_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = orders_dir.join(format!("{}.jsonl", date));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry as a line and flush it.
    pub fn write(&self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.writer.lock().flush()
    }
}

impl Drop for AuditLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Read every entry from every audit file under `logs_dir`, oldest file
/// first. Lines that fail to parse are skipped.
pub fn read_entries(logs_dir: impl AsRef<Path>) -> std::io::Result<Vec<AuditEntry>> {
    let orders_dir = logs_dir.as_ref().join("orders");
    if !orders_dir.exists() {
        return Ok(Vec::new());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(&orders_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "jsonl"))
        .collect();
    files.sort();

    let mut entries = Vec::new();
    for path in files {
        let reader = BufReader::new(File::open(&path)?);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match AuditEntry::from_json_line(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!(path = %path.display(), "Skipping bad audit line: {}", e),
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let writer = AuditLogWriter::new(temp.path()).unwrap();
        writer.write(&AuditEntry::new("info", "first")).unwrap();
        writer.write(&AuditEntry::new("info", "second")).unwrap();

        let entries = read_entries(temp.path()).unwrap();
        let msgs: Vec<_> = entries.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(msgs, vec!["first", "second"]);
        assert!(writer.path().starts_with(temp.path().join("orders")));
    }

    #[test]
    fn missing_dir_reads_empty() {
        let temp = TempDir::new().unwrap();
        assert!(read_entries(temp.path().join("nowhere")).unwrap().is_empty());
    }

    #[test]
    fn bad_lines_are_skipped() {
        let temp = TempDir::new().unwrap();
        let writer = AuditLogWriter::new(temp.path()).unwrap();
        writer.write(&AuditEntry::new("info", "kept")).unwrap();
        let mut file = OpenOptions::new().append(true).open(writer.path()).unwrap();
        writeln!(file, "not json").unwrap();

        let entries = read_entries(temp.path()).unwrap();
        assert_eq!(entries.len(), 1);
    }
}
