//! Layout building blocks shared by the fact sheet and catalog layouts

pub mod cover;
pub mod image_grid;
pub mod info_panel;
pub mod summary;
pub mod text_section;
pub mod title_block;

pub use cover::CoverPage;
pub use image_grid::{FramedImage, ImageGrid, ImageSlot};
pub use info_panel::InfoPanel;
pub use summary::SummaryPage;
pub use text_section::TextSection;
pub use title_block::{CatalogTitleCard, SheetTitle};
