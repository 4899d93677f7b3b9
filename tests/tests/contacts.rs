//! Contact scenarios: email deliverability through an injected MX resolver.

use assay_tests::prelude::*;

fn contacts() -> Scenario {
    Scenario::new("contacts")
        .schema("contacts/schema.yaml")
        .cases("contacts/directory.yaml")
        .class("Contact")
        .mx_domains(["example.com"])
}

#[test]
fn test_mx_checked_addresses() {
    contacts()
        .case("known_domain", |a| a.valid())
        .case("known_domain_mixed_case", |a| a.valid())
        .case("unknown_domain", |a| {
            a.violations(1)
                .at_code("email", codes::EMAIL_MX_CHECK_FAILED_ERROR)
        })
        .case("malformed_address", |a| {
            a.violations(1)
                .at_code("email", codes::EMAIL_INVALID_FORMAT_ERROR)
        })
        .case("missing_email", |a| {
            a.violations(1).at_code("email", codes::NOT_BLANK_ERROR)
        })
        .run()
        .unwrap();
}

#[test]
fn test_websites() {
    contacts()
        .case("ftp_website", |a| a.valid())
        .case("bare_website", |a| {
            a.violations(1)
                .at_code("website", codes::URL_INVALID_ERROR)
                .message("This value is not a valid URL")
        })
        .run()
        .unwrap();
}

#[test]
fn test_mx_check_without_resolver_is_a_configuration_error() {
    Scenario::new("contacts_without_resolver")
        .schema("contacts/schema.yaml")
        .cases("contacts/directory.yaml")
        .class("Contact")
        .case("known_domain", |a| a.error("requires a mx resolver"))
        .case("missing_email", |a| a.error_matching("^Constraint Email requires"))
        .run()
        .unwrap();
}
