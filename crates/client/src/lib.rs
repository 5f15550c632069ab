#![allow(clippy::too_many_arguments)]

pub mod domain;
pub mod routes;
pub mod shared;
pub mod usecases;
