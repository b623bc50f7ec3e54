#[path = "tools/datetime.rs"]
mod datetime;

#[path = "tools/encoding.rs"]
mod encoding;
