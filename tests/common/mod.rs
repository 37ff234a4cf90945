// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn header_response(status: u16, headers: &[(&str, &str)]) -> ResponseTemplate {
    let mut response = ResponseTemplate::new(status);
    for (name, value) in headers {
        response = response.append_header(*name, *value);
    }
    response
}

pub async fn mount_head(server: &MockServer, at: &str, response: ResponseTemplate) {
    Mock::given(method("HEAD"))
        .and(path(at))
        .respond_with(response)
        .mount(server)
        .await;
}
