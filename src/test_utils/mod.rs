#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod logging;
pub(crate) mod storage;

pub(crate) use http::{assert_content_type, assert_status, parse_json_body};
pub(crate) use logging::ErrorLogCount;
pub(crate) use storage::{FailingStorage, must_create_test_storage};
