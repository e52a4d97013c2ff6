pub mod dynamic;
pub mod person;
pub mod sample;

pub use dynamic::{Dynamic, Narrow};
pub use person::Person;
pub use sample::SampleData;
