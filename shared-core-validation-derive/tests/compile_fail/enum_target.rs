#![allow(dead_code)]

use shared_core_validation::Validate;

#[derive(Validate)]
pub enum Status {
    Active,
    Suspended,
}

fn main() {}
