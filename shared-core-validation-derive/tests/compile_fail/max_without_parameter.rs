#![allow(dead_code)]

use shared_core_validation::Validate;

#[derive(Validate)]
pub struct Signup {
    #[validate("required,max")]
    pub name: String,
}

fn main() {}
