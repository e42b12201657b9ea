/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Typed bindings for the Amazon Relational Database Service (Amazon RDS)
//! Query API.
//!
//! This crate models the request and response shapes of the RDS API
//! (API version 2014-10-31): inputs with fluent builders, outputs, shared
//! value types, modeled service faults, and the Query-protocol wire glue
//! (form-urlencoded request bodies, XML response parsing).
//!
//! It deliberately stops at the HTTP boundary. Building an
//! [`http::Request`] from an input and parsing an [`http::Response`] into an
//! output are the two hand-off points to a transport client that owns
//! signing, credentials, retries, and connection management:
//!
//! ```
//! use rds::{Config, Region};
//!
//! let config = Config::builder()
//!     .region(Region::new("us-east-1"))
//!     .build();
//!
//! let request = rds::input::DescribeDbInstancesInput::builder()
//!     .db_instance_identifier("database-1")
//!     .build()
//!     .make_request(&config)
//!     .expect("valid request");
//! assert_eq!(request.uri(), "https://rds.us-east-1.amazonaws.com/");
//! # let _ = request;
//! ```
//!
//! Responses are handed back through [`operation::ParseStrictResponse`],
//! implemented by the unit struct for each operation in [`operation`].

#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

mod query_ser;
mod xml_deser;

pub use crate::config::Config;
pub use aws_smithy_types::date_time::Format as DateTimeFormat;
pub use aws_smithy_types::DateTime;
pub use aws_types::region::Region;

/// Crate version number.
pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
