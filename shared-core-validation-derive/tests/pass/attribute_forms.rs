use shared_core_validation::{Record, Validate, Visibility};

#[derive(Validate)]
pub struct Forms {
    #[validate("required")]
    pub positional: String,
    #[validate("email", rename = "Email")]
    pub positional_renamed: String,
    #[validate(rules = "min=1,max=10", rename = "Items")]
    pub keyed: Vec<u32>,
    #[validate(rules = "pattern=^[a-z]+$")]
    pub r#type: String,
    #[validate("required")]
    pub(crate) internal: Option<String>,
    #[validate("min=-5")]
    pub offset: i64,
}

fn main() {
    let schema = Forms::schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        ["positional", "Email", "Items", "type", "internal", "offset"]
    );
    assert_eq!(schema.fields()[4].visibility(), Visibility::Private);
    assert_eq!(schema.type_name(), "Forms");
}
