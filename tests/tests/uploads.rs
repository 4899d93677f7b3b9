//! Upload scenarios: file existence, size and mime type against fixture files.

use assay_tests::prelude::*;

fn uploads() -> Scenario {
    Scenario::new("uploads")
        .schema("uploads/schema.yaml")
        .cases("uploads/cases.yaml")
        .class("Upload")
}

#[test]
fn test_avatar_files() {
    uploads()
        .case("small_avatar", |a| a.valid())
        .case("large_avatar", |a| {
            a.violations(1)
                .at_code("avatar", codes::FILE_TOO_LARGE_ERROR)
                .param("size", "2048")
                .param("limit", "1000")
        })
        .case("missing_avatar", |a| {
            a.violations(1)
                .at_code("avatar", codes::FILE_NOT_FOUND_ERROR)
                .message("The file could not be found")
        })
        .case("directory_avatar", |a| {
            a.violations(1).at_code("avatar", codes::FILE_NOT_READABLE_ERROR)
        })
        .case("text_avatar", |a| {
            a.violations(1)
                .at_code("avatar", codes::FILE_INVALID_MIME_TYPE_ERROR)
                .param("type", "\"text/plain\"")
        })
        .run()
        .unwrap();
}

#[test]
fn test_attachment_files() {
    uploads()
        .case("text_attachment", |a| a.valid())
        .case("image_attachment", |a| {
            a.violations(1)
                .at_code("attachment", codes::FILE_INVALID_MIME_TYPE_ERROR)
                .param("types", "\"text/plain\", \"application/pdf\"")
        })
        .case("no_files", |a| a.valid())
        .run()
        .unwrap();
}
