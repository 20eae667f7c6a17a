#![allow(dead_code)]

use shared_core_validation::Validate;

#[derive(Validate)]
pub struct Signup {
    #[validate("required", skip = "yes")]
    pub email: String,
}

fn main() {}
