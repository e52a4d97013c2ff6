use serde::{Deserialize, Serialize};

use super::dynamic::Dynamic;
use super::person::Person;

// Fixed inputs for a demonstration run.
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleData {
    pub integers: Vec<i32>,
    pub mixed: Vec<Dynamic>,
    pub nested: Vec<Vec<i32>>,
    pub people: Vec<Person>,
}

impl SampleData {
    pub fn v0() -> Self {
        let mut mixed: Vec<Dynamic> = vec![Dynamic::from(1), Dynamic::from("object")];
        mixed.extend((3..=9).map(Dynamic::from));

        Self {
            integers: (1..=9).collect(),
            mixed,
            nested: vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]],
            people: vec![Person::new("You", 15), Person::new("Doe", 34)],
        }
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self::v0()
    }
}
