use shared_core_validation::{FieldValidator, Validate};

#[derive(Validate)]
pub struct User {
    #[validate("required,min=2,max=50")]
    pub name: String,
    #[validate("required,email")]
    pub email: String,
    #[validate("min=18,max=120")]
    pub age: i32,
    pub created_at: std::time::SystemTime,
}

fn main() {
    let user = User {
        name: "John Doe".into(),
        email: "john@example.com".into(),
        age: 25,
        created_at: std::time::SystemTime::now(),
    };
    assert!(FieldValidator::new().validate(&user).is_ok());
}
