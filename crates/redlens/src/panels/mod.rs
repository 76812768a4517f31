pub mod credential_panel;
pub mod request_headers_panel;
pub mod request_panel;
pub mod response_panel;

pub const HORIZONTAL_GAP: f32 = 8.0;
pub const VERTICAL_GAP: f32 = 2.0;
