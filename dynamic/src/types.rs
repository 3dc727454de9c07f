use core_types::{DataType, Element};
use derive_more::From;
use raster::Raster;

include!("generated_raster_any.rs");
