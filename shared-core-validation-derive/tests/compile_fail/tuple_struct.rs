#![allow(dead_code)]

use shared_core_validation::Validate;

#[derive(Validate)]
pub struct Email(pub String);

fn main() {}
