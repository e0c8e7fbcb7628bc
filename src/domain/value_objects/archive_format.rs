//! ArchiveFormat value object - what 7z can read, write and create
//!
//! The lists mirror `7z i`. Formats with limited support can be browsed and
//! extracted but not modified.

use std::path::Path;

const SUPPORTED: &[&str] = &[
    "7z", "zip", "zipx", "jar", "xpi", "odt", "ods", "docx", "xlsx", "epub", "ipa", "appx", "gz",
    "gzip", "tgz", "tpz", "apk", "bz2", "bzip2", "tbz2", "tbz", "tar", "rar", "cab", "ar", "a",
    "deb", "lib", "arj", "z", "taz", "cpio", "rpm", "lzh", "lha", "chm", "chi", "chq", "chw",
    "hxs", "hxi", "hxr", "hxq", "hxw", "iso", "msi", "msp", "doc", "xls", "ppt", "wim", "swm",
    "esd", "ppkg", "exe", "apm", "cramfs", "dmg", "elf", "ext", "ext2", "ext3", "ext4", "fat",
    "img", "flv", "gpt", "mbr", "hfs", "hfsx", "ihex", "lzma", "lzma86", "macho", "mslz", "mub",
    "nsis", "dll", "sys", "te", "pmd", "qcow", "qcow2", "qcow2c", "squashfs", "swf", "ova", "udf",
    "scap", "uefif", "vdi", "vhd", "vmdk", "xar", "pkg", "xip", "xz", "txz", "liz", "tliz", "lz",
    "tlz", "lz4", "tlz4", "lz5", "tlz5", "zst", "tzstd",
];

const LIMITED: &[&str] = &[
    "rar", "cab", "ar", "a", "deb", "lib", "arj", "z", "taz", "cpio", "rpm", "lzh", "lha", "chm",
    "chi", "chq", "chw", "hxs", "hxi", "hxr", "hxq", "hxw", "iso", "msi", "msp", "doc", "xls",
    "ppt", "exe", "apm", "cramfs", "dmg", "elf", "ext", "ext2", "ext3", "ext4", "fat", "img",
    "flv", "gpt", "mbr", "hfs", "hfsx", "ihex", "lzma", "lzma86", "macho", "mslz", "mub", "nsis",
    "dll", "sys", "te", "pmd", "qcow", "qcow2", "qcow2c", "squashfs", "udf", "scap", "uefif",
    "vdi", "vhd", "vmdk", "xar", "pkg", "xip", "lz", "tlz",
];

const CREATABLE: &[&str] = &[
    "7z", "bz2", "bzip2", "tbz2", "tbz", "gz", "gzip", "tgz", "tpz", "apk", "tar", "ova", "zip",
    "zipx", "jar", "xpi", "odt", "ods", "docx", "xlsx", "epub", "ipa", "appx", "liz", "tliz",
    "lz4", "tlz4", "lz5", "tlz5", "zst", "tzstd", "wim", "swm", "esd", "ppkg", "xz", "txz",
];

/// Support level of an archive, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// Listable and modifiable
    Full,
    /// Listable and extractable only
    Limited,
    /// Not an archive 7z knows
    Unsupported,
}

impl ArchiveFormat {
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = extension(path) else {
            return ArchiveFormat::Unsupported;
        };
        if LIMITED.contains(&ext.as_str()) {
            ArchiveFormat::Limited
        } else if SUPPORTED.contains(&ext.as_str()) {
            ArchiveFormat::Full
        } else {
            ArchiveFormat::Unsupported
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ArchiveFormat::Unsupported)
    }

    pub fn is_limited(&self) -> bool {
        matches!(self, ArchiveFormat::Limited)
    }

    /// Whether 7z can create a new archive with this name
    pub fn is_creatable(path: &Path) -> bool {
        extension(path).is_some_and(|ext| CREATABLE.contains(&ext.as_str()))
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .filter(|e| !e.is_empty())
}
