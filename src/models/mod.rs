pub mod forecast;
pub mod loop_packet;
pub mod publish_payload;
