#![allow(dead_code)]

use shared_core_validation::Validate;

#[derive(Validate)]
pub struct Signup {
    #[validate("email,email")]
    pub email: String,
}

fn main() {}
