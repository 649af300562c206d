pub mod category_loader;

pub use category_loader::{load_category_map, parse_category_map, MapFormat};
