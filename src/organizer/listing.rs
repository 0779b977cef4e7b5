//! Directory listings of image and metadata files

use crate::utils::error::Result;
use std::cmp::Ordering;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Subfolder holding the images of a source folder or batch
pub const IMAGES_DIR: &str = "images";
/// Subfolder holding the metadata of a source folder or batch
pub const METADATA_DIR: &str = "metadata";

/// The two kinds of files a source folder holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Metadata,
}

impl FileKind {
    /// Name of the subfolder this kind lives in
    pub fn dir_name(&self) -> &'static str {
        match self {
            FileKind::Image => IMAGES_DIR,
            FileKind::Metadata => METADATA_DIR,
        }
    }

    /// Accepted extensions, matched case-sensitively
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FileKind::Image => &["jpg", "png"],
            FileKind::Metadata => &["json"],
        }
    }

    /// Whether a filename belongs to this kind
    pub fn accepts(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }
}

/// A file found in a listing, with its parsed sort number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub name: String,
    /// Value of the stem when the whole stem is ASCII digits
    pub number: Option<u64>,
}

impl ListedFile {
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        let number = numeric_stem(&name);
        Self { name, number }
    }

    pub fn is_numeric(&self) -> bool {
        self.number.is_some()
    }
}

impl Ord for ListedFile {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number, other.number) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.name.cmp(&other.name)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.name.cmp(&other.name),
        }
    }
}

impl PartialOrd for ListedFile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse the filename stem as a number.
///
/// `"0042.png"` gives `Some(42)`. Stems with anything other than ASCII digits
/// (`"42a.png"`, `"cover.png"`, `"-1.json"`) and stems too large for `u64`
/// give `None`.
pub fn numeric_stem(name: &str) -> Option<u64> {
    let stem = Path::new(name).file_stem()?.to_str()?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

/// Sorted listing of one subfolder
#[derive(Debug, Clone)]
pub struct Listing {
    pub kind: FileKind,
    pub files: Vec<ListedFile>,
}

impl Listing {
    /// Build a sorted listing from raw filenames, dropping other extensions
    pub fn from_names<I, S>(kind: FileKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut files: Vec<ListedFile> = names
            .into_iter()
            .map(Into::<String>::into)
            .filter(|name| kind.accepts(name))
            .map(ListedFile::new)
            .collect();
        files.sort();
        Self { kind, files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.clone()).collect()
    }

    pub fn non_numeric(&self) -> impl Iterator<Item = &ListedFile> {
        self.files.iter().filter(|f| !f.is_numeric())
    }
}

/// Read `dir` and return its files of the given kind, sorted
pub async fn list_files(dir: &Path, kind: FileKind) -> Result<Listing> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let file_type = entry.file_type().await?;
        if !(file_type.is_file() || file_type.is_symlink()) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping non UTF-8 filename {:?} in {}", raw, dir.display()),
        }
    }

    let listing = Listing::from_names(kind, names);
    for file in listing.non_numeric() {
        warn!(
            "{} has no numeric stem, ordering it after numbered files",
            dir.join(&file.name).display()
        );
    }
    debug!("Listed {} {:?} files in {}", listing.len(), kind, dir.display());
    Ok(listing)
}
