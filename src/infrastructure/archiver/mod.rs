//! Archive program adapters

mod seven_zip;

pub use seven_zip::SevenZipArchiver;
