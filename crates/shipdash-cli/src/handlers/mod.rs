mod context;

pub mod dashboard;
pub mod export;
pub mod guidance;
pub mod init;
pub mod shipments;

pub use context::HandlerContext;
