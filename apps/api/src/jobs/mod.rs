// Job resource: listing, lookup, mock search, compatibility analysis, status updates.

pub mod analysis;
pub mod handlers;
