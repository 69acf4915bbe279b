//! `SeaORM` entities for the test system service

pub mod prelude;
