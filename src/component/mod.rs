pub mod photo_importer;

pub use photo_importer::PhotoImporter;
