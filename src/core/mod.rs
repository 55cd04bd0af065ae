pub mod data_set;
pub mod layout;
pub mod types;

pub use data_set::{DataSet, MAX_DATA_SUM};
pub use layout::{BoundingBox, LayoutGeometry, Point};
pub use types::Viewport;
