pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::reduce;
pub use value_objects::*;
