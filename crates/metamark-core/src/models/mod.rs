pub mod metamark_file;

pub use metamark_file::MetamarkFile;
