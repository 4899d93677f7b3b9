//! User signup scenarios: presence, email format, range, nested list and cross-field checks.

use assay_tests::prelude::*;

mod signup {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("signup")
            .schema("users/schema.yaml")
            .cases("users/signup.yaml")
            .class("User")
            .case("valid_user", |a| a.valid())
            .case("blank_email", |a| {
                a.violations(1)
                    .at_code("email", codes::NOT_BLANK_ERROR)
                    .message("This value should not be blank")
            })
            .case("missing_email", |a| {
                a.violations(1).at_code("email", codes::NOT_BLANK_ERROR)
            })
            .case("malformed_email", |a| {
                a.violations(1)
                    .at_code("email", codes::EMAIL_INVALID_FORMAT_ERROR)
                    .param("value", "\"alice.example.com\"")
            })
            .case("underage", |a| {
                a.violations(1)
                    .at_code("age", codes::TOO_LOW_ERROR)
                    .param("limit", "18")
                    .message("This value should be 18 or more")
            })
            .case("age_not_a_number", |a| {
                a.violations(1)
                    .at_code("age", codes::INVALID_NUMBER_ERROR)
                    .message("This value should be a valid number")
            })
            .case("numeric_string_age", |a| a.valid())
    }

    #[test]
    fn test_signup_fields() {
        scenario().run().unwrap();
    }
}

mod tags {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("tags")
            .schema("users/schema.yaml")
            .cases("users/signup.yaml")
            .class("User")
            .case("short_tags", |a| {
                a.violations(2)
                    .at_code("tags[1]", codes::TOO_SHORT_ERROR)
                    .at_code("tags[2]", codes::TOO_SHORT_ERROR)
                    .param("limit", "2")
                    .param("length", "1")
            })
            .case("tags_not_a_list", |a| {
                a.violations(1).at_code("tags", codes::UNEXPECTED_TYPE_ERROR)
            })
    }

    #[test]
    fn test_every_tag_is_checked() {
        scenario().run().unwrap();
    }
}

mod age_range {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("age_range")
            .schema("users/schema.yaml")
            .cases("users/signup.yaml")
            .class("User")
            .case("inverted_age_range", |a| {
                a.violations(1)
                    .at_code("minAge", codes::PROPERTIES_INEQUALITY_ERROR)
                    .message("The value of minAge should be less than the value of maxAge")
            })
            .case("equal_age_range", |a| {
                a.violations(1).at("minAge")
            })
            .case("open_age_range", |a| a.valid())
    }

    #[test]
    fn test_class_level_inequality() {
        scenario().run().unwrap();
    }
}

mod aggregation {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("aggregation")
            .schema("users/schema.yaml")
            .cases("users/signup.yaml")
            .class("User")
            .case("everything_wrong", |a| {
                a.violations(4)
                    .at_code("minAge", codes::PROPERTIES_INEQUALITY_ERROR)
                    .at_code("email", codes::NOT_BLANK_ERROR)
                    .at_code("age", codes::TOO_LOW_ERROR)
                    .at_code("tags[1]", codes::TOO_SHORT_ERROR)
            })
    }

    #[test]
    fn test_all_violations_are_collected() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_unknown_class_is_a_configuration_error() {
    Scenario::new("unknown_class")
        .schema("users/schema.yaml")
        .cases("users/signup.yaml")
        .class("Customer")
        .case("valid_user", |a| a.error("Unknown class: Customer"))
        .run()
        .unwrap();
}
