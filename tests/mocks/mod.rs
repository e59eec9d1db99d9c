#![allow(dead_code)]
pub mod gateway_mock;
