// HTTP module entry point
// Response builders shared by the dispatcher and the built-in handlers

pub mod response;

pub use response::{
    build_bad_request_response, build_health_response, build_kill_response, build_text_response,
};
