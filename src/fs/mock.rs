//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
pub struct MockFs {
    files: RwLock<HashMap<String, MockFile>>,
}

struct MockFile {
    content: Vec<u8>,
    file_type: FsFileType,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.insert(path, content.as_bytes().to_vec(), FsFileType::File);
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.insert(path, Vec::new(), FsFileType::Dir);
    }

    /// ディレクトリと、その中のファイルをまとめて追加
    pub fn add_dir_with_file(&self, dir: &str, file_name: &str, content: &str) {
        self.add_dir(dir);
        self.add_file(&format!("{}/{}", dir.trim_end_matches('/'), file_name), content);
    }

    fn insert(&self, path: &str, content: Vec<u8>, file_type: FsFileType) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), MockFile { content, file_type });
    }

    fn not_found() -> crate::error::ForgeError {
        std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into()
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .contains_key(path.to_string_lossy().as_ref())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
            .map(|f| f.file_type == FsFileType::Dir)
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let files = self.files.read().unwrap();
        match files.get(path.to_string_lossy().as_ref()) {
            Some(file) if file.file_type == FsFileType::File => {
                Ok(String::from_utf8_lossy(&file.content).to_string())
            }
            _ => Err(Self::not_found()),
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FsDirEntry>> {
        let path_str = path.to_string_lossy().to_string();
        let files = self.files.read().unwrap();

        match files.get(&path_str) {
            Some(file) if file.file_type != FsFileType::Dir => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotADirectory,
                    "Not a directory",
                )
                .into());
            }
            None => return Err(Self::not_found()),
            _ => {}
        }

        let prefix = if path_str.ends_with('/') {
            path_str.clone()
        } else {
            format!("{}/", path_str)
        };

        let entries = files
            .iter()
            .filter(|(k, _)| {
                // 直接の子のみ（サブディレクトリの中身は除外）
                k.strip_prefix(&prefix)
                    .map(|remainder| !remainder.contains('/'))
                    .unwrap_or(false)
            })
            .map(|(k, v)| FsDirEntry {
                path: PathBuf::from(k),
                file_type: v.file_type,
            })
            .collect();

        Ok(entries)
    }
}
