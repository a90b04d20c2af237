pub mod controllers;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod repositories;
pub mod routes;
pub mod state;

#[cfg(test)]
pub mod test_support;
