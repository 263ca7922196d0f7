// Application resource: candidacies, their status and attached documents.

pub mod handlers;
