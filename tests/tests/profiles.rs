//! Profile scenarios: record structure, nested paths, URLs and date ordering.

use assay_tests::prelude::*;

fn profiles() -> Scenario {
    Scenario::new("profiles")
        .schema("profiles/schema.yaml")
        .cases("profiles/accounts.yaml")
        .class("Profile")
}

#[test]
fn test_complete_profile() {
    profiles().case("complete", |a| a.valid()).run().unwrap();
}

#[test]
fn test_settings_collection() {
    profiles()
        .case("minimal_settings", |a| a.valid())
        .case("missing_and_extra_settings", |a| {
            a.violations(2)
                .at_code("settings[newsletter]", codes::MISSING_FIELD_ERROR)
                .at_code("settings[color]", codes::NO_SUCH_FIELD_ERROR)
                .message("The fields \"newsletter\" are missing")
                .message("The fields \"color\" were not expected")
        })
        .case("blank_theme", |a| {
            a.violations(1).at_code("settings[theme]", codes::NOT_BLANK_ERROR)
        })
        .case("bad_language", |a| {
            a.violations(1).at_code("settings[language]", codes::REGEX_FAILED_ERROR)
        })
        .case("settings_not_a_record", |a| {
            a.violations(1).at_code("settings", codes::UNEXPECTED_TYPE_ERROR)
        })
        .run()
        .unwrap();
}

#[test]
fn test_links_and_nested_paths() {
    profiles()
        .case("insecure_link", |a| {
            a.violations(2)
                .at_code("links[1]", codes::URL_INVALID_ERROR)
                .at_code("links[2]", codes::URL_INVALID_ERROR)
        })
        .case("links_not_a_list", |a| {
            a.violations(1).at_code("links", codes::UNEXPECTED_TYPE_ERROR)
        })
        .case("short_city", |a| {
            a.violations(1).at_code("address.city", codes::TOO_SHORT_ERROR)
        })
        .case("bad_first_contact", |a| {
            a.violations(1).at_code("contacts[0]", codes::EMAIL_INVALID_FORMAT_ERROR)
        })
        .run()
        .unwrap();
}

#[test]
fn test_date_order() {
    profiles()
        .case("dates_reversed", |a| {
            a.violations(1)
                .at_code("memberSince", codes::DATE_ORDER_ERROR)
                .message("The date memberSince should be before lastSeen")
        })
        .case("same_day", |a| a.valid())
        .case("unparseable_dates", |a| {
            a.violations(2)
                .at_code("memberSince", codes::DATE_ORDER_INVALID_DATE_ERROR)
                .at_code("lastSeen", codes::DATE_ORDER_INVALID_DATE_ERROR)
        })
        .case("never_seen", |a| a.valid())
        .run()
        .unwrap();
}

mod teams {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("teams")
            .schema("profiles/schema.yaml")
            .cases("profiles/teams.yaml")
            .class("Team")
            .case("staffed", |a| a.valid())
            .case("empty_team", |a| {
                a.violations(1).at_code("members", codes::NOT_BLANK_ERROR)
            })
            .case("unnamed_member", |a| {
                a.violations(2)
                    .at_code("members[1][name]", codes::NOT_BLANK_ERROR)
                    .at_code("members[1][role]", codes::REGEX_FAILED_ERROR)
            })
            .case("unexpected_member_field", |a| {
                a.violations(1)
                    .at_code("members[0][email]", codes::NO_SUCH_FIELD_ERROR)
            })
    }

    #[test]
    fn test_collection_inside_all() {
        scenario().run().unwrap();
    }
}
