mod dto;

pub use dto::OrderSubmission;
