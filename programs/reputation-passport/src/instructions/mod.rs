pub mod initialize;

pub use initialize::*;

pub mod register_worker;

pub use register_worker::*;

pub mod add_job;

pub use add_job::*;

pub mod queries;

pub use queries::*;
