//! Infrastructure layer - storage, services, logging and seeding

pub mod logging;
pub mod seed;
pub mod services;
pub mod storage;
