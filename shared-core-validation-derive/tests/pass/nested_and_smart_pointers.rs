use std::collections::HashMap;
use std::sync::Arc;

use shared_core_validation::{FieldValidator, Validate, Validator, ValidatorExt};

#[derive(Validate)]
pub struct Address {
    #[validate("required")]
    pub city: String,
}

#[derive(Validate)]
pub struct Customer {
    #[validate("required")]
    pub address: Option<Address>,
    #[validate("required,max=3")]
    pub tags: HashMap<String, String>,
    #[validate("min=1")]
    pub shared: Arc<str>,
}

#[derive(Validate)]
pub struct Empty;

fn main() {
    let customer = Customer {
        address: Some(Address { city: String::new() }),
        tags: HashMap::from([("tier".to_string(), "gold".to_string())]),
        shared: Arc::from("x"),
    };

    let validator: Box<dyn Validator> = Box::new(FieldValidator::new());
    assert!(validator.validate(&customer).is_ok());
    assert!(validator.validate(&Arc::new(Empty)).is_ok());
    assert!(validator.validate(&None::<Customer>).is_err());
}
