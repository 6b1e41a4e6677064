pub mod classification;
pub mod collation;
pub mod collection;
pub mod image_source;
pub mod plant;

pub use classification::{Classification, ClassificationSet};
pub use collation::{compare, sort_by_common_name, CollationKey};
pub use collection::{RecordCollection, ALL_CLASSIFICATIONS};
pub use image_source::{decode_data_url, ImageSource};
pub use plant::{PlantRecord, SearchField};
