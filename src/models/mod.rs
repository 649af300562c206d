pub mod category;
pub mod category_map;
pub mod course;
pub mod loaders;
pub mod summary;

pub use category::{Category, CategoryFlags};
pub use category_map::{CategoryIndex, CategoryMap};
pub use course::{parse_grade, parse_number, ClassifiedCourse, CourseRecord, GPA_THRESHOLD};
pub use loaders::{load_category_map, parse_category_map, MapFormat};
pub use summary::{CategoryTotals, SummaryLine, SummaryRow, SummaryTable};
