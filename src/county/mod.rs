mod entity;
mod loader;


pub use entity::County;
pub use loader::{dataset_file, load_county_table, parse_county_table};

/// FIPS code identifying a county (e.g., "06037")
pub type CountyId = String;

/// Directory the bundled county tables are read from
pub const DEFAULT_DATA_DIR: &str = "resource_files";

/// County counts of the bundled tables
pub const DATASET_SIZES: [usize; 4] = [111, 290, 896, 3108];
