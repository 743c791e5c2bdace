pub mod alpha;
pub mod batch;
pub mod compositor;
pub mod crop;
pub mod padding;
pub mod pipeline;
pub mod policy;
pub mod raster;
pub mod resize;
pub mod size_matcher;
