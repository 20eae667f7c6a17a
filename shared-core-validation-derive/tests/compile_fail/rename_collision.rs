#![allow(dead_code)]

use shared_core_validation::Validate;

#[derive(Validate)]
pub struct Account {
    #[validate("required")]
    pub name: String,
    #[validate(rules = "required", rename = "name")]
    pub alias: String,
}

fn main() {}
