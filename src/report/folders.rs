//! Folder structure presence check.

use std::path::Path;

use crate::checklist::Checklist;

use super::print_console_banner;

/// Presence of one expected directory path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderStatus {
    pub path: &'static str,
    pub present: bool,
}

/// Query every expected folder path under `root`.
///
/// Presence is a loose existence check (any file type counts), matching the
/// check applied to expected files.
pub fn folder_statuses(folders: &[&'static str], root: &Path) -> Vec<FolderStatus> {
    folders
        .iter()
        .map(|path| FolderStatus {
            path,
            present: root.join(path).exists(),
        })
        .collect()
}

/// Print the folder-check banner and one status line per expected folder.
pub fn print_folder_check(checklist: &Checklist, root: &Path) {
    print_console_banner("FOLDER STRUCTURE CHECK");
    for status in folder_statuses(checklist.folders, root) {
        if status.present {
            println!("[OK] {}/", status.path);
        } else {
            println!("[MISSING] {}/", status.path);
        }
    }
}
