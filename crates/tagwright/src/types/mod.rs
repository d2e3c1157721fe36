mod tag_name;
mod value;

pub use tag_name::TagName;
pub use value::{Data, Value};
