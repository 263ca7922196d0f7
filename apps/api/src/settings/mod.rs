// Settings resource: the singleton configuration record plus canned system endpoints.

pub mod handlers;
