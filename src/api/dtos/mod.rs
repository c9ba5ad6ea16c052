pub mod parsing;
pub mod requests;
pub mod responses;
