#![allow(dead_code)]

use shared_core_validation::Validate;

#[derive(Validate)]
pub struct Wrapper<T> {
    #[validate("required")]
    pub inner: T,
}

fn main() {}
