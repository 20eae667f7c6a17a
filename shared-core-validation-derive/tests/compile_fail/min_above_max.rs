#![allow(dead_code)]

use shared_core_validation::Validate;

#[derive(Validate)]
pub struct Signup {
    #[validate("min=10,max=5")]
    pub name: String,
}

fn main() {}
