#![allow(dead_code)]

extern crate thiserror;

#[path = "../../src/core/capture_profile.rs"]
mod capture_profile;
#[path = "../../src/core/config_validation.rs"]
mod config_validation;
#[path = "../../src/core/device_status.rs"]
mod device_status;
#[path = "../../src/core/dispatcher.rs"]
mod dispatcher;
#[path = "../../src/core/frame.rs"]
mod frame;
#[path = "../../src/hardware/camera/ov2640.rs"]
mod ov2640;
#[path = "../../src/core/stream_encoder.rs"]
mod stream_encoder;
#[path = "../../src/core/stream_session.rs"]
mod stream_session;
