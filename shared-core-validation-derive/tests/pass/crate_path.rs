use shared_core_validation as validation;
use validation::{FieldValidator, Record, Validate};

#[derive(Validate)]
#[validate(crate = "validation")]
pub struct Login {
    pub name: String,
    #[validate("required,pattern=[0-9],pattern=[a-z]", rename = "name")]
    pub password: String,
}

fn main() {
    let rules: Vec<&str> = Login::schema().fields()[0]
        .rules()
        .iter()
        .map(|rule| rule.name())
        .collect();
    assert_eq!(rules, ["required", "pattern", "pattern"]);

    let login = Login {
        name: String::new(),
        password: "abc".into(),
    };
    let err = FieldValidator::new().validate(&login).unwrap_err();
    assert_eq!(err.violations().len(), 1);
}
